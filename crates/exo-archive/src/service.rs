//! Cached, never-failing planet queries.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use exo_core::{PlanetRecord, normalize};

use crate::cache::{CacheKey, QueryCache};
use crate::client::ArchiveSource;
use crate::clock::{Clock, SystemClock};
use crate::fallback::sample_planets;

/// Front door for planet queries: cache, then archive, then fallback data.
///
/// The cache lock is never held across the archive fetch, so two identical
/// queries that miss at the same time both go to the archive; the later
/// result overwrites the earlier one.
#[derive(Debug)]
pub struct ExoplanetService<S, C = SystemClock> {
    source: S,
    cache: Mutex<QueryCache<C>>,
}

impl<S: ArchiveSource> ExoplanetService<S, SystemClock> {
    /// Wrap `source` with a wall-clock cache using the default ten-minute window.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_cache(source, QueryCache::default())
    }
}

impl<S: ArchiveSource, C: Clock> ExoplanetService<S, C> {
    #[must_use]
    pub fn with_cache(source: S, cache: QueryCache<C>) -> Self {
        Self {
            source,
            cache: Mutex::new(cache),
        }
    }

    /// Planets whose name contains `search`, newest discoveries first.
    ///
    /// Never fails. A fresh cached result is returned as-is (same
    /// allocation). On a miss the archive is queried, rows are normalized and
    /// scored, and the result is cached. If the archive is unavailable the
    /// built-in sample planets are returned and nothing is cached.
    pub async fn query(&self, search: &str, limit: u32) -> Arc<[PlanetRecord]> {
        let key = CacheKey::new(search, limit);

        let cached = self.lock_cache().get(&key);
        if let Some(records) = cached {
            tracing::debug!(search, limit, count = records.len(), "archive cache hit");
            return records;
        }

        tracing::debug!(search, limit, "archive cache miss");
        match self.source.fetch_rows(search, limit).await {
            Ok(rows) => {
                let records: Arc<[PlanetRecord]> = rows.iter().map(normalize).collect();
                tracing::debug!(search, limit, count = records.len(), "caching archive result");
                self.lock_cache().insert(key, Arc::clone(&records));
                records
            }
            Err(error) => {
                tracing::warn!(search, limit, %error, "archive unavailable, serving sample planets");
                sample_planets().into()
            }
        }
    }

    /// Number of cached queries, fresh or stale.
    #[must_use]
    pub fn cached_queries(&self) -> usize {
        self.lock_cache().len()
    }

    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    fn lock_cache(&self) -> MutexGuard<'_, QueryCache<C>> {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
