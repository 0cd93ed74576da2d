//! Error types for backend API calls.

use thiserror::Error;

/// Errors that can occur while talking to the Constitutional AI backend.
///
/// The kind is an explicit discriminator so callers (and tests) can tell a
/// dead network from a 4xx/5xx from a malformed body without string matching.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network connectivity error (DNS, connection refused, etc.).
    #[error("network error: {0}")]
    Network(String),

    /// Request exceeded deadline.
    #[error("request timeout after {0}ms")]
    Timeout(u64),

    /// Backend returned a non-2xx response.
    #[error("HTTP {status}: {message}")]
    Status {
        status: u16,
        message: String,
        /// Error body the server supplied, JSON if it parsed, raw text otherwise.
        details: Option<serde_json::Value>,
    },

    /// Backend response doesn't match the expected shape.
    #[error("invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a reqwest transport error into timeout vs. network failure.
    pub(crate) fn from_transport(e: reqwest::Error, timeout_ms: u64) -> Self {
        if e.is_timeout() {
            ApiError::Timeout(timeout_ms)
        } else {
            ApiError::Network(e.to_string())
        }
    }
}
