use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::bitfinex::client::{API_URL, REQUEST_TIMEOUT};

pub const CONFIG_FILE: &str = "config.toml";

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub request_timeout_secs: u64,
    // zero last_price means "not a ticker", fall back to the error payload
    pub zero_last_price_is_error: bool,
    pub default_symbol: String,

    pub log_level: String,
    pub log_dir: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: API_URL.to_string(),
            request_timeout_secs: REQUEST_TIMEOUT.as_secs(),
            zero_last_price_is_error: true,
            default_symbol: "btcusd".to_string(),
            log_level: "info".to_string(),
            log_dir: None,
        }
    }
}

// missing or broken config.toml falls back to defaults
pub fn load_config() -> Config {
    fs::read_to_string(CONFIG_FILE)
        .ok()
        .and_then(|content| toml::from_str(&content).ok())
        .unwrap_or_default()
}

pub fn load_config_from(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file \"{}\"", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file \"{}\"", path.display()))
}
