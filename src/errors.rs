use chrono::NaiveDate;
use thiserror::Error;

/// Error type that captures the failures surfaced by the rent ledger.
#[derive(Debug, Error)]
pub enum RentError {
    #[error("Invalid input: {0}")]
    Validation(String),
    #[error("Invalid period: end date {end} is before start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RentError>;
