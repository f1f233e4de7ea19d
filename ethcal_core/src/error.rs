//! Error types for the ethcal_core library.

use crate::CalendarDate;
use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for ethcal_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A year, month or day outside the valid range of its calendar
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Birth date falls after the reference date
    #[error("Birth date {birth} is after the reference date {reference}")]
    ChronologicalViolation {
        birth: CalendarDate,
        reference: CalendarDate,
    },

    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}
