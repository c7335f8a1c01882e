//! Server-side rendering of the calculator page.

use magbranch_components::electrical::open_circuit::OpenCircuitOutput;
use uom::si::electrical_resistance::ohm;

use crate::form::{OpenCircuitForm, Outcome};

const PAGE_TITLE: &str = "Transformer Open Circuit Test Calculator";

const PAGE_INTRO: &str = "This application calculates the resistance (R0) and \
                          reactance (X0) of a transformer based on open circuit \
                          test measurements.";

const STYLE: &str = "\
body { font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }
label { display: block; margin: 0.75rem 0; }
input[type=\"number\"] { display: block; width: 12rem; margin-top: 0.25rem; }
button { margin-top: 1rem; }
.banner { margin-top: 1.5rem; padding: 0.75rem 1rem; border-radius: 4px; }
.banner.success { background: #e6f4ea; color: #1e4620; }
.banner.error { background: #fdecea; color: #611a15; }";

/// Renders the full calculator page.
///
/// With no outcome, this is the idle state: the form alone, populated with
/// `form`'s values. With an outcome, the submitted values are echoed back and
/// the matching banner is appended below the form.
///
/// All rendered text is produced locally; the only request data echoed back
/// are the three parsed numbers.
pub fn form_page(form: &OpenCircuitForm, outcome: Option<&Outcome>) -> String {
    let banner = match outcome {
        None => String::new(),
        Some(Outcome::Success(output)) => success_banner(output),
        Some(Outcome::Error(message)) => error_banner(message),
    };

    format!(
        "<!doctype html>
<html lang=\"en\">
<head>
<meta charset=\"utf-8\">
<title>{PAGE_TITLE}</title>
<style>
{STYLE}
</style>
</head>
<body>
<h1>{PAGE_TITLE}</h1>
<p>{PAGE_INTRO}</p>
<form method=\"post\" action=\"/calculate\">
{voltage}
{current}
{power}
<button type=\"submit\">Calculate R0 and X0</button>
</form>
{banner}
</body>
</html>
",
        voltage = number_field("Open Circuit Voltage (V0) [Volts]", "v0", "1.0", form.v0),
        current = number_field("Open Circuit Current (I0) [Amperes]", "i0", "0.01", form.i0),
        power = number_field("Open Circuit Power (W0) [Watts]", "w0", "1.0", form.w0),
    )
}

fn number_field(label: &str, name: &str, step: &str, value: f64) -> String {
    format!(
        "<label>{label}\
         <input type=\"number\" name=\"{name}\" min=\"0\" step=\"{step}\" \
         value=\"{value}\" required></label>"
    )
}

fn success_banner(output: &OpenCircuitOutput) -> String {
    format!(
        "<div class=\"banner success\">
<p>Calculated Results:</p>
<p>Resistance (R0): {:.2} ohms</p>
<p>Reactance (X0): {:.2} ohms</p>
</div>",
        output.core_loss_resistance.get::<ohm>(),
        output.magnetizing_reactance.get::<ohm>(),
    )
}

fn error_banner(message: &str) -> String {
    format!("<div class=\"banner error\">\n<p>{message}</p>\n</div>")
}
