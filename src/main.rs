use pexels_search::Client;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    async fn run() -> pexels_search::Result<()> {
        let query = std::env::args().nth(1).unwrap_or_else(|| "waves".to_owned());

        let client = Client::new_from_env()?;
        let result = client.search_photos(&query, 15, 1).await?;

        println!(
            "page {} of {:?} results for {:?}",
            result.page(),
            result.total_results(),
            query
        );
        for photo in result.photos() {
            println!("{} {}x{} {}", photo.id(), photo.width(), photo.height(), photo.src().original);
        }
        println!("{} requests left this month", client.remaining_quota_this_month());

        Ok(())
    }

    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run().await {
        eprintln!("{}", e);
    }
}
