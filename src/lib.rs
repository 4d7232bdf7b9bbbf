pub mod bitfinex;
pub mod config;
pub mod logging;

pub use bitfinex::{
    ApiErrorMessage, Credentials, TickerClient, TickerError, TickerOutcome, TickerSnapshot,
};
