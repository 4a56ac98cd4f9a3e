//! Core error types for the net worth ledger.
//!
//! Numeric parsing never fails, so these errors only cover the edges of the
//! system: user input that names things the ledger does not know, a poisoned
//! ledger lock, configuration, and report export.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the ledger.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Ledger state unavailable: {0}")]
    State(String),

    #[error("Report export failed: {0}")]
    Export(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Validation errors for user input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Unknown item kind '{0}' (expected 'asset' or 'liability')")]
    UnknownItemKind(String),

    #[error("Unknown item field '{0}' (expected 'name' or 'value')")]
    UnknownItemField(String),

    #[error("Unknown report format '{0}' (expected text, markdown, json or csv)")]
    UnknownReportFormat(String),

    #[error("Category table for {0} must not be empty")]
    EmptyCategoryTable(String),

    #[error("Add some assets or liabilities to generate a report")]
    EmptyReport,
}

// === From implementations for common error types ===

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Export(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Export(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Export(err.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for Error {
    fn from(err: std::sync::PoisonError<T>) -> Self {
        Error::State(err.to_string())
    }
}
