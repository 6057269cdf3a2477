//! Error types shared by the API calls and the fetch workers.
//!
//! The `ClientError` enum unifies the failure cases of a price-fetching run:
//! transport problems, unexpected HTTP statuses, and JSON decoding failures,
//! allowing crates to propagate a single error type.
use thiserror::Error;

/// Unified error type shared across the workspace.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure: the request could not be sent, the connection
    /// failed, or the response body could not be read.
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered with a status code other than 200 OK.
    #[error("unexpected status code {status} from {endpoint}")]
    Status {
        /// Endpoint path that produced the response.
        endpoint: String,
        /// Numeric HTTP status code of the response.
        status: u16,
    },

    /// Failure while decoding a JSON response body via serde_json. Covers both
    /// invalid JSON and bodies that do not match the expected schema.
    #[error("JSON decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
