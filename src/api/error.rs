//! API Error Types
//!
//! Failures raised by the dashboard API client. The variants keep transport,
//! status and shape problems apart for diagnostics; callers treat them alike.

use thiserror::Error;

/// Errors that can occur when fetching dashboard data
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Backend unavailable at {0}")]
    Unavailable(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Malformed response from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Classify a transport error the way the rest of the client reports it
    pub(crate) fn from_transport(url: &str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ApiError::Timeout
        } else if error.is_connect() {
            ApiError::Unavailable(url.to_string())
        } else {
            ApiError::Request(error)
        }
    }
}

/// Result alias for API client calls
pub type ApiResult<T> = Result<T, ApiError>;
