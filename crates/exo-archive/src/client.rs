//! Exoplanet archive HTTP client.

use std::future::Future;
use std::time::Duration;

use exo_core::RawRecord;

use crate::error::ArchiveError;
use crate::http::check_response;
use crate::query::{ArchiveQuery, DEFAULT_ENDPOINT};

/// Anything that can answer a planet search with raw archive rows.
///
/// [`ArchiveClient`] is the production source; tests substitute stubs.
pub trait ArchiveSource: Send + Sync {
    /// Fetch up to `limit` rows whose name contains `search`.
    fn fetch_rows(
        &self,
        search: &str,
        limit: u32,
    ) -> impl Future<Output = Result<Vec<RawRecord>, ArchiveError>> + Send;
}

/// Connection settings for [`ArchiveClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub endpoint: String,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(10),
            user_agent: "exoscope/0.1".to_string(),
        }
    }
}

/// HTTP client for the archive's TAP sync endpoint.
#[derive(Debug, Clone)]
pub struct ArchiveClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ArchiveClient {
    /// Create a client against the public archive with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new() -> Result<Self, ArchiveError> {
        Self::with_settings(&ClientSettings::default())
    }

    /// # Errors
    ///
    /// Returns [`ArchiveError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn with_settings(settings: &ClientSettings) -> Result<Self, ArchiveError> {
        let http = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.timeout)
            .build()?;
        Ok(Self {
            http,
            endpoint: settings.endpoint.clone(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run `query` and parse the JSON row array.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError`] if the request fails, the archive returns a
    /// non-success status, or the body is not an array of row objects.
    pub async fn fetch(&self, query: &ArchiveQuery) -> Result<Vec<RawRecord>, ArchiveError> {
        let url = query.url(&self.endpoint);
        tracing::debug!(search = query.search(), limit = query.limit(), "querying archive");

        let resp = check_response(self.http.get(&url).send().await?).await?;
        let body = resp.text().await?;
        parse_rows(&body)
    }
}

impl ArchiveSource for ArchiveClient {
    async fn fetch_rows(&self, search: &str, limit: u32) -> Result<Vec<RawRecord>, ArchiveError> {
        self.fetch(&ArchiveQuery::new(search, limit)).await
    }
}

/// Parse a TAP JSON response body. Any malformed row fails the whole body.
pub(crate) fn parse_rows(body: &str) -> Result<Vec<RawRecord>, ArchiveError> {
    serde_json::from_str(body).map_err(|e| ArchiveError::Parse(e.to_string()))
}
