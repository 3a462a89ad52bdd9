//! Cache Statistics Module
//!
//! Tracks cache performance metrics including hits, misses, and evictions.

use std::time::Duration;

use serde::Serialize;

// == Cache Stats ==
/// Cache performance metrics.
///
/// The hit, miss and eviction counters are maintained live by the owning
/// store. The remaining fields are derived and only filled in when a snapshot
/// is taken via [`CacheStore::stats`](crate::cache::CacheStore::stats).
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Number of successful cache retrievals
    pub hits: u64,
    /// Number of failed cache retrievals (key not found or expired)
    pub misses: u64,
    /// Number of entries evicted to satisfy the capacity bound
    pub evictions: u64,
    /// Current number of stored entries, not-yet-reclaimed expired ones included
    pub size: usize,
    /// Capacity bound of the store
    pub max_size: usize,
    /// hits / (hits + misses), 0.0 when nothing has been looked up yet
    pub hit_rate: f64,
    /// Mean age of live entries, zero when none are live
    pub average_age: Duration,
    /// Age of the oldest live entry
    pub oldest_age: Duration,
    /// Age of the newest live entry
    pub newest_age: Duration,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub(crate) fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    /// Increments the eviction counter.
    pub(crate) fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Hit Rate ==
    /// Recomputes `hit_rate` as hits / (hits + misses), or 0.0 if no lookups
    /// have been made.
    pub(crate) fn refresh_hit_rate(&mut self) {
        let total = self.hits + self.misses;
        self.hit_rate = if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        };
    }
}
