use reqwest::StatusCode;
use thiserror::Error;

/// Marker put in front of messages that came from the exchange itself.
pub const API_ERROR_PREFIX: &str = "API: ";

#[derive(Error, Debug)]
pub enum TickerError {
    /// Connection failure, timeout, or the body could not be read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Body was neither a ticker nor an error payload.
    #[error("Failed to decode ticker response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Ticker decoded with `last_price == 0` and the body has no `message`.
    ///
    /// Kept apart from [`TickerError::Api`]: there is no exchange text to report,
    /// so this is not an API error (unlike an empty `"API: "` message).
    #[error("Ticker response has a zero last price and no error message")]
    ZeroLastPrice,

    #[error("Unexpected HTTP status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("{}{message}", API_ERROR_PREFIX)]
    Api { message: String },
}

impl TickerError {
    pub fn is_api_error(&self) -> bool {
        matches!(self, TickerError::Api { .. })
    }
}
