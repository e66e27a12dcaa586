//! Query cache settings.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

/// Default freshness window in seconds (ten minutes).
const fn default_ttl_secs() -> u64 {
    600
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CacheConfig {
    /// How long a cached query result stays fresh, in seconds.
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Maximum number of cached queries. 0 means unbounded.
    #[serde(default)]
    pub capacity: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            capacity: 0,
        }
    }
}

impl CacheConfig {
    /// The entry limit, or `None` when unbounded.
    pub const fn capacity_limit(&self) -> Option<NonZeroUsize> {
        NonZeroUsize::new(self.capacity)
    }
}
