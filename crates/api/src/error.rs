//! Error types for task service operations.

use reqwest::StatusCode;

/// Errors that can occur while talking to the task service.
///
/// Callers treat every variant uniformly as "the call failed"; the
/// distinction exists for logging and for the message shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be sent or the connection failed.
    #[error("request to task service failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success status code.
    #[error("task service returned {status} for {url}")]
    Status {
        /// The HTTP status code received.
        status: StatusCode,
        /// The request URL, for log context.
        url: String,
    },

    /// The response body could not be decoded as the expected JSON shape.
    #[error("failed to decode task service response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// A specialized Result type for task service operations.
pub type Result<T> = std::result::Result<T, Error>;
