use std::time::Duration;

use anyhow::Context;
use chrono::TimeDelta;
use exo_archive::{ArchiveClient, ClientSettings, ExoplanetService, QueryCache, SystemClock};
use exo_config::{ArchiveConfig, CacheConfig, ExoConfig};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: ExoplanetService<ArchiveClient>,
    pub config: ExoConfig,
}

impl AppContext {
    /// Build the archive client and query cache from loaded config.
    pub fn init(config: ExoConfig) -> anyhow::Result<Self> {
        let client = ArchiveClient::with_settings(&client_settings(&config.archive))
            .context("failed to build archive client")?;
        let cache = query_cache(&config.cache)?;
        tracing::debug!(
            endpoint = client.endpoint(),
            ttl_secs = config.cache.ttl_secs,
            capacity = config.cache.capacity,
            "archive service ready"
        );

        Ok(Self {
            service: ExoplanetService::with_cache(client, cache),
            config,
        })
    }
}

fn client_settings(archive: &ArchiveConfig) -> ClientSettings {
    ClientSettings {
        endpoint: archive.base_url.clone(),
        timeout: Duration::from_secs(archive.timeout_secs),
        user_agent: archive.user_agent.clone(),
    }
}

fn query_cache(cache: &CacheConfig) -> anyhow::Result<QueryCache> {
    let ttl = i64::try_from(cache.ttl_secs)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .context("cache.ttl_secs is out of range")?;

    let query_cache = QueryCache::new(ttl, SystemClock);
    Ok(match cache.capacity_limit() {
        Some(capacity) => query_cache.with_capacity(capacity),
        None => query_cache,
    })
}
