//! Custom error types for cashflow-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for cashflow-cli operations
#[derive(Error, Debug)]
pub enum CashflowError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for operator input (dates, formats, paths)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Errors while reading ledger payloads
    #[error("Import error: {0}")]
    Import(String),

    /// Errors while writing reports or exports
    #[error("Export error: {0}")]
    Export(String),

    /// The API payload reported failure
    #[error("API payload error: {0}")]
    Payload(String),
}

impl CashflowError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for CashflowError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CashflowError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for cashflow-cli operations
pub type CashflowResult<T> = Result<T, CashflowError>;
