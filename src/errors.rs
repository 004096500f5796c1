/*!
 * Error types for the seoscore application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use thiserror::Error;

/// Errors raised before any analyzer runs on a draft
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or unusable
    #[error("Invalid input: field '{field}' {reason}")]
    InvalidInput {
        /// Name of the offending draft field
        field: String,
        /// What is wrong with it
        reason: String,
    },
}

impl ValidationError {
    /// Create an invalid input error for a field
    pub fn invalid_input(field: &str, reason: &str) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Errors for inconsistent validation thresholds
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A lower bound is above its upper bound
    #[error("Invalid range for {name}: min {min} is greater than max {max}")]
    InvalidRange {
        name: &'static str,
        min: f64,
        max: f64,
    },

    /// Score weights are negative or sum to zero
    #[error("Invalid score weights: {0}")]
    InvalidWeights(String),
}

/// Errors from export and import of content rows
#[derive(Error, Debug)]
pub enum ExportError {
    /// Nothing to export
    #[error("No content found to export")]
    NoContent,

    /// Format name not recognised
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// JSON serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Draft failed input validation
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration is inconsistent
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Export or import failed
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}
