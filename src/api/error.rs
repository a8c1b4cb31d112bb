// ABOUTME: Error taxonomy for backend API operations

use thiserror::Error;

/// Failures from the two backend operations (config fetch, lead submission).
/// Every variant is converted to a single human-readable string at the state
/// boundary; nothing propagates past the event loop.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure (DNS, connect, timeout, TLS)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success HTTP status
    #[error("server returned {status}")]
    Status { status: reqwest::StatusCode },

    /// Body did not match the expected shape
    #[error("unexpected response shape: {0}")]
    Shape(String),

    /// The API reported an error in an otherwise successful response
    #[error("{0}")]
    Api(String),
}
