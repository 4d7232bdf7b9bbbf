use std::time::Duration;

use crate::bitfinex::error::TickerError;
use crate::bitfinex::parser::{self, TickerOutcome};
use crate::bitfinex::types::{Credentials, TickerSnapshot};
use crate::config::Config;

pub const API_URL: &str = "https://api.bitfinex.com";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const PUBTICKER_PATH: &str = "/v2/pubticker/";

#[derive(Debug, Clone)]
pub struct TickerClient {
    credentials: Credentials,
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
    zero_last_price_is_error: bool,
}

impl TickerClient {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(api_key, api_secret),
            http: reqwest::Client::new(),
            base_url: API_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
            zero_last_price_is_error: true,
        }
    }

    pub fn from_config(config: &Config, credentials: Credentials) -> Self {
        Self {
            credentials,
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout: Duration::from_secs(config.request_timeout_secs),
            zero_last_price_is_error: config.zero_last_price_is_error,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn ticker_url(&self, symbol: &str) -> String {
        format!("{}{}{}", self.base_url, PUBTICKER_PATH, symbol.to_lowercase())
    }

    /// Fetches the current ticker for `symbol` (case-insensitive, e.g. `"BTCUSD"`).
    ///
    /// One GET, no retries. A body carrying `{"message": ...}` comes back as
    /// [`TickerError::Api`]; anything else that fails to parse as a ticker is
    /// returned as the original decode error.
    #[tracing::instrument(skip(self))]
    pub async fn fetch_ticker(&self, symbol: &str) -> Result<TickerSnapshot, TickerError> {
        let url = self.ticker_url(symbol);
        tracing::debug!(%url, "Requesting ticker");

        let response = self.http.get(&url).timeout(self.timeout).send().await?;
        let status = response.status();
        // response is consumed here, the connection is released on every path below
        let body = response.bytes().await?;
        tracing::debug!(%status, bytes = body.len(), "Received ticker response");

        let outcome = parser::classify_body(status, &body, self.zero_last_price_is_error);
        match &outcome {
            TickerOutcome::Api(err) => {
                tracing::warn!(%status, message = %err.message, "Exchange returned an error");
            }
            TickerOutcome::Invalid(TickerError::ZeroLastPrice) => {
                tracing::warn!("Ticker has zero last price, treating as invalid");
            }
            TickerOutcome::Invalid(err) => {
                tracing::debug!(error = %err, "Ticker response could not be decoded");
            }
            TickerOutcome::Snapshot(_) => {}
        }

        outcome.into_result()
    }
}
