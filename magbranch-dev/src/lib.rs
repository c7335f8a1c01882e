//! A web server that presents the open-circuit test calculator as an
//! interactive form page.
//!
//! The server provides:
//! - `GET /` renders the input form with the default measurement values
//! - `POST /calculate` accepts a form submission and renders the result page
//! - `POST /api/calculate` accepts the same fields as JSON and returns the
//!   computed output as JSON
//!
//! Every request is handled independently; the component behind the form is
//! a zero-sized value and no state is shared across submissions.

pub mod form;
pub mod page;

use warp::{Filter, http::StatusCode};

use crate::form::{OpenCircuitForm, Outcome};

/// Builds the filter tree for the calculator page and its API route.
pub fn routes() -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let index = warp::path::end()
        .and(warp::get())
        .map(|| warp::reply::html(page::form_page(&OpenCircuitForm::default(), None)));

    let calculate = warp::path("calculate")
        .and(warp::post())
        .and(warp::body::form())
        .map(|form: OpenCircuitForm| {
            let outcome = form::submit(&form);
            warp::reply::html(page::form_page(&form, Some(&outcome)))
        });

    let api_calculate = warp::path!("api" / "calculate")
        .and(warp::post())
        .and(warp::body::json())
        .map(|form: OpenCircuitForm| match form::submit(&form) {
            Outcome::Success(output) => {
                warp::reply::with_status(warp::reply::json(&output), StatusCode::OK)
            }
            Outcome::Error(message) => warp::reply::with_status(
                warp::reply::json(&serde_json::json!({ "error": message })),
                StatusCode::BAD_REQUEST,
            ),
        });

    index.or(calculate).or(api_calculate)
}

/// Runs the form server until the process is stopped.
pub async fn run_form_server() {
    println!("Server running on http://localhost:3030");
    warp::serve(routes()).run(([127, 0, 0, 1], 3030)).await;
}
