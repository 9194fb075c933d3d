use std::io;

use thiserror::Error;

/// Error type raised when a ledger mutation violates its preconditions.
///
/// A rejected mutation never changes ledger state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Invalid input: category must be non-empty")]
    EmptyCategory,
    #[error("Invalid input: date `{0}` must be in ISO format YYYY-MM-DD")]
    MalformedDate(String),
    #[error("Invalid input: {field} must be >= 0 (got {value})")]
    NegativeAmount { field: &'static str, value: i64 },
    #[error("Invalid input: amount for {category} on {date} exceeds the supported range")]
    AmountOverflow { category: String, date: String },
}

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Failures while loading or saving the tracker configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Serde(err.to_string())
    }
}
