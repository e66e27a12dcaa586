//! Archive error types.

use thiserror::Error;

/// Errors that can occur when querying the exoplanet archive.
///
/// Every variant means the same thing to [`crate::ExoplanetService`]: the
/// archive is unavailable and fallback data is served instead.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The archive returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the archive.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The response body was not a JSON array of rows.
    #[error("parse error: {0}")]
    Parse(String),

    /// The archive returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },
}
