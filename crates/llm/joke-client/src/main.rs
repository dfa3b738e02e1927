use jbot_core::JokeSource;
use joke_client::{DadJokeFetcher, OpenRouterClient, OpenRouterConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = OpenRouterConfig::from_env();
    config.validate()?;
    if !config.has_api_key() {
        anyhow::bail!("OPENROUTER_API_KEY environment variable not set");
    }

    let fetcher = DadJokeFetcher::new(OpenRouterClient::new(config)?);
    let joke = fetcher.fetch_joke().await?;
    println!("Joke: {}", joke);

    Ok(())
}
