use std::env;
use std::fmt;

use serde::Deserialize;

pub const API_KEY_ENV: &str = "BITFINEX_API_KEY";
pub const API_SECRET_ENV: &str = "BITFINEX_API_SECRET";

// stored on the client, not used by public endpoints
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub api_secret: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
        }
    }

    // unset variables become empty strings, same as an anonymous client
    pub fn from_env() -> Self {
        Self::new(
            env::var(API_KEY_ENV).unwrap_or_default(),
            env::var(API_SECRET_ENV).unwrap_or_default(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.api_key.is_empty() || self.api_secret.is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"[REDACTED]")
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Response of `GET /v2/pubticker/<symbol>`.
///
/// Every field arrives as a decimal string (`"100.5"`) and is parsed to `f64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct TickerSnapshot {
    #[serde(deserialize_with = "crate::bitfinex::parser::from_str")]
    pub mid: f64, // (bid + ask) / 2
    #[serde(deserialize_with = "crate::bitfinex::parser::from_str")]
    pub bid: f64, // innermost bid
    #[serde(deserialize_with = "crate::bitfinex::parser::from_str")]
    pub ask: f64, // innermost ask
    #[serde(deserialize_with = "crate::bitfinex::parser::from_str")]
    pub last_price: f64,
    #[serde(deserialize_with = "crate::bitfinex::parser::from_str")]
    pub low: f64, // 24h
    #[serde(deserialize_with = "crate::bitfinex::parser::from_str")]
    pub high: f64, // 24h
    #[serde(deserialize_with = "crate::bitfinex::parser::from_str")]
    pub volume: f64, // 24h
    #[serde(deserialize_with = "crate::bitfinex::parser::from_str")]
    pub timestamp: f64, // unix seconds, fractional
}

impl TickerSnapshot {
    pub fn spread(&self) -> f64 {
        self.ask - self.bid
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorMessage {
    pub message: String,
}
