#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    quote_portal::run().await;
}
