use reqwest::StatusCode;
use thiserror::Error;

/// Errors from resolving the permission matrix.
///
/// These never escape the store: it turns each one into the fallback
/// matrix plus the error's message.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure, including timeouts.
    #[error("Permission request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Endpoint answered with a non-2xx status.
    #[error("Permission endpoint {url} returned {status}")]
    Status {
        /// Status returned.
        status: StatusCode,
        /// URL requested.
        url: String,
    },

    /// Body did not match the matrix schema.
    #[error("Permission endpoint returned a malformed matrix: {0}")]
    Parse(String),

    /// Configured URL could not be used.
    #[error("Invalid permissions URL: {0}")]
    InvalidUrl(String),
}
