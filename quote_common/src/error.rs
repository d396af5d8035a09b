//! Error types for the quote fetch pipeline.
//!
//! The `FetchError` enum covers the four failure kinds a single fetch attempt
//! can produce. All of them are terminal: a failed attempt is reported to the
//! immediate caller exactly once and never retried anywhere in the workspace.
use thiserror::Error;

/// Failure kinds for a single quote fetch attempt.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request URL could not be built from the configured base.
    #[error("Bad URL: {0}")]
    BadUrl(String),

    /// Transport-level failure (connection refused/reset, DNS, broken pipe).
    #[error("Bad response: {0}")]
    BadResponse(String),

    /// The response body was empty, or the decoded array held no records.
    #[error("Invalid data: empty or missing response body")]
    InvalidData,

    /// The response body did not decode as an array of quote records.
    #[error("Decode error: {0}")]
    DecodeError(#[from] serde_json::Error),
}
