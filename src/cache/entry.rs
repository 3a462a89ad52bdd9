//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL and access
//! bookkeeping.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cache entry: the stored value plus its lifecycle metadata.
///
/// Timestamps are monotonic [`Instant`]s, so expiry and recency comparisons
/// are immune to wall-clock adjustments.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// When the value was inserted (reset on overwrite)
    pub inserted_at: Instant,
    /// How long the entry stays valid after insertion
    pub ttl: Duration,
    /// Number of successful reads served from this entry
    pub access_count: u64,
    /// When the entry was last read (insertion time until first read)
    pub last_accessed_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a fresh entry holding `value` for at most `ttl`.
    pub fn new(value: V, ttl: Duration) -> Self {
        let now = Instant::now();
        Self {
            value,
            inserted_at: now,
            ttl,
            access_count: 0,
            last_accessed_at: now,
        }
    }

    // == Is Expired ==
    /// Checks whether the entry has outlived its TTL at `now`.
    ///
    /// Boundary condition: an entry is expired once its full TTL has elapsed,
    /// i.e. when `now - inserted_at >= ttl`. A zero TTL therefore makes the
    /// entry expired on any later observation.
    pub fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.inserted_at) >= self.ttl
    }

    // == Touch ==
    /// Records a successful read at `now`.
    pub fn touch(&mut self, now: Instant) {
        self.access_count += 1;
        self.last_accessed_at = now;
    }

    // == Age ==
    /// Time elapsed since insertion.
    pub fn age(&self, now: Instant) -> Duration {
        now.duration_since(self.inserted_at)
    }

    /// Remaining validity at `now`; zero once the TTL has elapsed.
    pub fn remaining_ttl(&self, now: Instant) -> Duration {
        self.ttl.saturating_sub(self.age(now))
    }
}
