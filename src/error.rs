//! Error types for the contact extraction library.

use thiserror::Error;

/// Result type alias for contact extraction operations
pub type Result<T> = std::result::Result<T, ContactError>;

/// Errors that can occur while fetching a page or constructing an extractor.
///
/// The extraction engine itself never fails once constructed: malformed HTML
/// is recovered by the parser, and traversal edge cases degrade to "feature
/// absent" rather than propagating.
#[derive(Error, Debug)]
pub enum ContactError {
    /// Invalid URL provided as the resolution base
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP request failed (network error, timeout, or error status)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Result serialization error
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
