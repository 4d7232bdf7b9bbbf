use anyhow::{Context, Result, anyhow};

use bitfinex_ticker::bitfinex::{Credentials, TickerClient};
use bitfinex_ticker::{config, logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Install default crypto provider for rustls before any TLS connections
    rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .map_err(|_| anyhow!("Failed to install rustls crypto provider"))?;

    let config = config::load_config();
    let _log_guard = logging::init_logging(&config)?;

    let symbol = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config.default_symbol.clone());

    let credentials = Credentials::from_env();
    if credentials.is_empty() {
        tracing::debug!("No API credentials in environment, using anonymous client");
    }

    let client = TickerClient::from_config(&config, credentials);

    tracing::info!("Fetching ticker for {}...", symbol);
    let ticker = client
        .fetch_ticker(&symbol)
        .await
        .with_context(|| format!("Failed to fetch ticker for \"{}\"", symbol))?;

    tracing::info!(
        last_price = ticker.last_price,
        bid = ticker.bid,
        ask = ticker.ask,
        spread = ticker.spread(),
        low = ticker.low,
        high = ticker.high,
        volume = ticker.volume,
        timestamp = ticker.timestamp,
        "Ticker {}",
        symbol
    );

    Ok(())
}
