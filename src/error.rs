//! Error types for rusty-cip

use crate::types::Field;
use crate::validation::ValidationErrors;
use thiserror::Error;

/// Main error type for rusty-cip
#[derive(Error, Debug)]
pub enum CipError {
    #[error("{field} out of range: {message}")]
    InputOutOfRange { field: Field, message: String },

    #[error("Invalid inputs: {0}")]
    Validation(ValidationErrors),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result type alias for rusty-cip operations
pub type Result<T> = std::result::Result<T, CipError>;
