//! Eviction Strategy Module
//!
//! Victim selection for the capacity bound. Strategies are pure over the
//! current entry metadata: recency and insertion order are read off the
//! entries themselves, so no separate tracking structure is kept in sync.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use std::time::Instant;

use crate::cache::CacheEntry;
use crate::error::CacheError;

// == Eviction Strategy ==
/// Policy for choosing which entry to drop when an insert would exceed
/// capacity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EvictionStrategy {
    /// Evict the entry with the oldest last access
    #[default]
    Lru,
    /// Evict the entry with the oldest insertion, regardless of reads
    Fifo,
    /// Prefer an already-expired entry; fall back to FIFO when none is
    Ttl,
}

impl EvictionStrategy {
    // == Select Victim ==
    /// Picks the key to evict from `entries`.
    ///
    /// Ties resolve to the first candidate in map iteration order. Returns
    /// `None` only for an empty map.
    pub(crate) fn select_victim<K, V>(
        self,
        entries: &HashMap<K, CacheEntry<V>>,
        now: Instant,
    ) -> Option<K>
    where
        K: Eq + Hash + Clone,
    {
        match self {
            EvictionStrategy::Lru => entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_accessed_at)
                .map(|(key, _)| key.clone()),
            EvictionStrategy::Fifo => oldest_inserted(entries),
            EvictionStrategy::Ttl => entries
                .iter()
                .find(|(_, entry)| entry.is_expired(now))
                .map(|(key, _)| key.clone())
                .or_else(|| oldest_inserted(entries)),
        }
    }
}

/// FIFO victim: the entry with the oldest insertion time.
fn oldest_inserted<K, V>(entries: &HashMap<K, CacheEntry<V>>) -> Option<K>
where
    K: Eq + Hash + Clone,
{
    entries
        .iter()
        .min_by_key(|(_, entry)| entry.inserted_at)
        .map(|(key, _)| key.clone())
}

impl fmt::Display for EvictionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EvictionStrategy::Lru => "lru",
            EvictionStrategy::Fifo => "fifo",
            EvictionStrategy::Ttl => "ttl",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for EvictionStrategy {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lru" => Ok(EvictionStrategy::Lru),
            "fifo" => Ok(EvictionStrategy::Fifo),
            "ttl" => Ok(EvictionStrategy::Ttl),
            other => Err(CacheError::InvalidConfig(format!(
                "unknown eviction strategy: {}",
                other
            ))),
        }
    }
}
