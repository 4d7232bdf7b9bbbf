use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, de};
use serde_json::Value;

use crate::bitfinex::error::TickerError;
use crate::bitfinex::types::{ApiErrorMessage, TickerSnapshot};

// longest slice of an unexpected body kept in a Status error
const MAX_ERROR_BODY_CHARS: usize = 256;

/// What a ticker response body turned out to be.
#[derive(Debug)]
pub enum TickerOutcome {
    Snapshot(TickerSnapshot),
    Api(ApiErrorMessage),
    Invalid(TickerError),
}

impl TickerOutcome {
    pub fn into_result(self) -> Result<TickerSnapshot, TickerError> {
        match self {
            TickerOutcome::Snapshot(snapshot) => Ok(snapshot),
            TickerOutcome::Api(err) => Err(TickerError::Api {
                message: err.message,
            }),
            TickerOutcome::Invalid(err) => Err(err),
        }
    }
}

// numbers come over the wire as "123.45"; bare JSON numbers are accepted too
pub fn from_str<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(f64),
    }

    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|e| de::Error::custom(format!("invalid decimal string \"{}\": {}", s, e))),
        StringOrNumber::Number(n) => Ok(n),
    }
}

pub fn classify_body(
    status: StatusCode,
    body: &[u8],
    zero_last_price_is_error: bool,
) -> TickerOutcome {
    if !status.is_success() {
        return match decode_object::<ApiErrorMessage>(body) {
            Ok(err) => TickerOutcome::Api(err),
            Err(_) => TickerOutcome::Invalid(TickerError::Status {
                status,
                body: truncate_body(body),
            }),
        };
    }

    match decode_object::<TickerSnapshot>(body) {
        Ok(snapshot) if !(zero_last_price_is_error && snapshot.last_price == 0.0) => {
            TickerOutcome::Snapshot(snapshot)
        }
        // zero last price: the body may still be an error payload
        Ok(_) => match decode_object::<ApiErrorMessage>(body) {
            Ok(err) => TickerOutcome::Api(err),
            Err(_) => TickerOutcome::Invalid(TickerError::ZeroLastPrice),
        },
        Err(decode_err) => match decode_object::<ApiErrorMessage>(body) {
            Ok(err) => TickerOutcome::Api(err),
            Err(_) => TickerOutcome::Invalid(TickerError::Decode(decode_err)),
        },
    }
}

// derived struct impls also take positional arrays, both payloads are objects on the wire
fn decode_object<T: DeserializeOwned>(body: &[u8]) -> Result<T, serde_json::Error> {
    match serde_json::from_slice::<Value>(body)? {
        value @ Value::Object(_) => serde_json::from_value(value),
        other => Err(de::Error::custom(format!(
            "expected a JSON object, found {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn truncate_body(body: &[u8]) -> String {
    String::from_utf8_lossy(body)
        .chars()
        .take(MAX_ERROR_BODY_CHARS)
        .collect()
}
