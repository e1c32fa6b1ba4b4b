use std::result;

use thiserror::Error;

/// Error types for fetching and exporting papers
#[derive(Error, Debug)]
pub enum PubMedError {
    /// HTTP request failed at the transport level
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Endpoint answered with a non-success status
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// Response body was not valid JSON
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// CSV serialization failed
    #[error("CSV writing failed: {0}")]
    CsvError(#[from] csv::Error),

    /// IO error for file operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = result::Result<T, PubMedError>;

impl PubMedError {
    /// Transport failures and non-success HTTP statuses
    pub fn is_network_error(&self) -> bool {
        matches!(
            self,
            PubMedError::RequestError(_) | PubMedError::ApiError { .. }
        )
    }

    /// Response bodies that could not be decoded
    pub fn is_malformed_response(&self) -> bool {
        matches!(self, PubMedError::JsonError(_))
    }
}
