//! Taglens error types

use std::time::Duration;

/// Taglens error types
#[derive(Debug, thiserror::Error)]
pub enum TagLensError {
    // Transport/network errors
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("rate limited, retry after {retry_after:?}")]
    RateLimited { retry_after: Option<Duration> },

    #[error("authentication failed")]
    AuthenticationFailed,

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Upload response did not carry the identifier the follow-up
    /// queries correlate on.
    #[error("upload response missing upload id")]
    MissingUploadId,

    /// Image bytes could not be used for an upload (empty or not a
    /// recognized image format). Raised before any network call.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl TagLensError {
    /// Errors that abort before any network call is made.
    ///
    /// Everything else is recovered locally by the orchestrator, which
    /// degrades the affected result to an empty list.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            TagLensError::Configuration(_) | TagLensError::InvalidImage(_)
        )
    }
}

/// Result type alias for taglens operations
pub type Result<T> = std::result::Result<T, TagLensError>;
