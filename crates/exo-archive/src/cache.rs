//! Time-windowed memoization of archive query results.

use std::collections::HashMap;
use std::num::NonZeroUsize;
use std::sync::Arc;

use chrono::{DateTime, TimeDelta, Utc};
use exo_core::PlanetRecord;

use crate::clock::{Clock, SystemClock};

/// How long a cached result stays fresh unless configured otherwise.
pub const DEFAULT_TTL_SECS: i64 = 600;

/// Identity of an archive query: the search text and the row limit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub search: String,
    pub limit: u32,
}

impl CacheKey {
    #[must_use]
    pub fn new(search: &str, limit: u32) -> Self {
        Self {
            search: search.to_string(),
            limit,
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    records: Arc<[PlanetRecord]>,
    stored_at: DateTime<Utc>,
}

/// In-memory query cache.
///
/// An entry is fresh while `now - stored_at < ttl`. Stale entries are not
/// removed; the next successful fetch for the same key overwrites them.
/// With a capacity set, inserting a new key into a full cache evicts the
/// entry with the oldest timestamp.
#[derive(Debug)]
pub struct QueryCache<C = SystemClock> {
    entries: HashMap<CacheKey, CacheEntry>,
    ttl: TimeDelta,
    capacity: Option<NonZeroUsize>,
    clock: C,
}

impl Default for QueryCache<SystemClock> {
    fn default() -> Self {
        Self::new(TimeDelta::seconds(DEFAULT_TTL_SECS), SystemClock)
    }
}

impl<C: Clock> QueryCache<C> {
    #[must_use]
    pub fn new(ttl: TimeDelta, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            capacity: None,
            clock,
        }
    }

    #[must_use]
    pub fn with_capacity(mut self, capacity: NonZeroUsize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    #[must_use]
    pub const fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// The cached records for `key`, if present and still fresh.
    #[must_use]
    pub fn get(&self, key: &CacheKey) -> Option<Arc<[PlanetRecord]>> {
        let entry = self.entries.get(key)?;
        let age = self.clock.now() - entry.stored_at;
        (age < self.ttl).then(|| Arc::clone(&entry.records))
    }

    /// Store `records` under `key`, stamped with the current time.
    pub fn insert(&mut self, key: CacheKey, records: Arc<[PlanetRecord]>) {
        if let Some(capacity) = self.capacity {
            if !self.entries.contains_key(&key) && self.entries.len() >= capacity.get() {
                self.evict_oldest();
            }
        }
        let stored_at = self.clock.now();
        self.entries.insert(key, CacheEntry { records, stored_at });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .entries
            .iter()
            .min_by_key(|(_, entry)| entry.stored_at)
            .map(|(key, _)| key.clone());
        if let Some(key) = oldest {
            tracing::debug!(search = %key.search, limit = key.limit, "evicting oldest cache entry");
            self.entries.remove(&key);
        }
    }
}
