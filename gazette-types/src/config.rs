//! Configuration types shared across the facade and middleware.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Service-level configuration injected into the facade at construction.
///
/// Configuration is always an explicit value owned by the facade; there is no
/// process-wide mutable state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GazetteConfig {
    /// Maximum number of news items returned by the home-page listing.
    pub news_count_on_home_page: usize,
}

impl Default for GazetteConfig {
    fn default() -> Self {
        Self {
            news_count_on_home_page: 10,
        }
    }
}

/// Configuration for the read-through store cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum number of cached entries across all read capabilities.
    pub capacity: u64,
    /// Time-to-live for cached entries. Comment writes invalidate their news
    /// item's comment list eagerly; TTL bounds staleness for everything else.
    pub ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: 1024,
            ttl: Duration::from_secs(60),
        }
    }
}
