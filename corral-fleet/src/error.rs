//! Error types for the fleet client

use thiserror::Error;

/// Result type alias for fleet client operations
pub type Result<T> = std::result::Result<T, FleetError>;

/// Errors that can occur when talking to the fleet service
#[derive(Debug, Error)]
pub enum FleetError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("Fleet API error (status {status}): {message}")]
    ApiError {
        /// HTTP status code
        status: u16,
        /// Error message from the API
        message: String,
    },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl FleetError {
    /// Create an API error from status code and message
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }
}
