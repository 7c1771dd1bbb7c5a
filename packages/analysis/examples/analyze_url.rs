//! Analyze a product URL from the command line.
//!
//! Runs the full pipeline against the real Gemini API and prints the
//! normalized report as JSON.
//!
//! ```bash
//! GEMINI_API_KEY=... cargo run --example analyze_url -- "https://shop.example/product/123"
//! ```

use analysis::{Analyzer, GeminiInference};
use anyhow::{Context, Result};
use gemini_client::GeminiClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let url = std::env::args()
        .nth(1)
        .context("usage: analyze_url <product-url>")?;

    let client = GeminiClient::from_env().context("GEMINI_API_KEY must be set")?;
    let analyzer = Analyzer::new(GeminiInference::new(client));

    let report = analyzer.analyze(&url).await?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
