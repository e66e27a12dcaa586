//! Response status checks for archive requests.
//!
//! 429 becomes [`ArchiveError::RateLimited`] (with `Retry-After` parsed,
//! defaulting to 60 s); any other non-success status becomes
//! [`ArchiveError::Api`] carrying the response body.

use crate::error::ArchiveError;

/// Return the response unchanged if its status is a success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ArchiveError> {
    if resp.status() == 429 {
        return Err(ArchiveError::RateLimited {
            retry_after_secs: parse_retry_after(&resp),
        });
    }
    if !resp.status().is_success() {
        return Err(ArchiveError::Api {
            status: resp.status().as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}
