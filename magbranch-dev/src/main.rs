#[tokio::main]
async fn main() {
    magbranch_dev::run_form_server().await;
}
