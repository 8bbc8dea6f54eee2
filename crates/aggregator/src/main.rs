//! Market snapshot entry point.
//!
//! Runs one aggregation pass across all four domains and prints the
//! snapshot as JSON. Intended for smoke-testing the pipeline; the real
//! consumer is a rendering layer that calls [`aggregator::fetch_all`].

use aggregator::{fetch_all, Config, DemoData};
use anyhow::Result;
use sources::{MprClient, NassClient, QuoteClient};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!("fetching snapshot for {} markets", config.auction_slugs.len());

    let mpr = MprClient::new(config.mpr_api_key.clone());
    let nass = NassClient::new(config.nass_api_key.clone());
    let quotes = QuoteClient::new();

    let snapshot = fetch_all(&mpr, &nass, &quotes, &config.auction_slugs, &DemoData).await;

    info!(
        "auctions: {} ({}), cash: {} ({}), slaughter: {} ({}), futures: {} ({})",
        snapshot.auctions.records.len(),
        snapshot.auctions.source,
        snapshot.cash.records.len(),
        snapshot.cash.source,
        snapshot.slaughter.records.len(),
        snapshot.slaughter.source,
        snapshot.futures.records.len(),
        snapshot.futures.source,
    );

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
