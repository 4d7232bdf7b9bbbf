pub mod client;
pub mod error;
pub mod parser;
pub mod types;

pub use client::TickerClient;
pub use error::TickerError;
pub use parser::TickerOutcome;
pub use types::{ApiErrorMessage, Credentials, TickerSnapshot};
