//! Error types for the remote API client.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// API client errors
#[derive(Debug, Error)]
pub enum ApiError {
    /// API configuration file does not exist
    #[error("Could not find the API config file: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Configuration values are out of range
    #[error("Invalid API configuration: {0}")]
    InvalidConfig(String),

    /// Caller passed an unusable argument
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Transport-level failure (DNS, connect, timeout, TLS)
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, as text
        body: String,
    },

    /// Response body did not have the expected envelope
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error reading configuration
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
