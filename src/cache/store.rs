//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with per-entry TTL expiry and
//! strategy-driven eviction at the capacity bound.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, EvictionStrategy};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Bounded, expiring key-value store.
///
/// A `CacheStore` is a cheap handle: clones share the same underlying map,
/// and every operation locks it only for that operation, so concurrent
/// callers never observe a partially applied mutation. Reads hand out cloned
/// values; entry bookkeeping never escapes the store.
///
/// Expired entries are reclaimed lazily by the read that discovers them.
/// There is no background sweep, so the enumeration views (`keys`, `values`,
/// `entries`) and `len` may still report entries whose next read would expire
/// them.
#[derive(Debug)]
pub struct CacheStore<K, V> {
    inner: Arc<Mutex<StoreInner<K, V>>>,
}

impl<K, V> Clone for CacheStore<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[derive(Debug)]
struct StoreInner<K, V> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// TTL applied when `set` receives none
    default_ttl: Duration,
    /// Maximum number of entries allowed
    max_size: usize,
    /// Victim selection policy at capacity
    strategy: EvictionStrategy,
}

impl<K, V> CacheStore<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates a new CacheStore from `config`.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidConfig`] when `config.max_size` is zero.
    pub fn new(config: CacheConfig) -> Result<Self> {
        if config.max_size == 0 {
            return Err(CacheError::InvalidConfig(
                "max_size must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            inner: Arc::new(Mutex::new(StoreInner {
                entries: HashMap::new(),
                stats: CacheStats::new(),
                default_ttl: config.default_ttl,
                max_size: config.max_size,
                strategy: config.strategy,
            })),
        })
    }

    // == Set ==
    /// Stores a key-value pair with optional TTL.
    ///
    /// If the key already exists, the value is overwritten and its TTL clock
    /// restarts from now. If a new key would exceed capacity, the configured
    /// strategy evicts exactly one existing entry first, so the bound holds
    /// before and after every call.
    ///
    /// A zero TTL is accepted; such an entry expires on its next read.
    pub fn set(&self, key: K, value: V, ttl: Option<Duration>) {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        let effective_ttl = ttl.unwrap_or(inner.default_ttl);

        // Overwrites never trigger eviction; only net-new keys can push the
        // map past its bound.
        let is_overwrite = inner.entries.contains_key(&key);
        if !is_overwrite && inner.entries.len() >= inner.max_size {
            let now = Instant::now();
            if let Some(victim) = inner.strategy.select_victim(&inner.entries, now) {
                inner.entries.remove(&victim);
                inner.stats.record_eviction();
                debug!("evicted one entry under {} strategy", inner.strategy);
            }
        }

        inner.entries.insert(key, CacheEntry::new(value, effective_ttl));
    }

    // == Get ==
    /// Retrieves a value by key.
    ///
    /// Returns the value if present and not expired; a hit bumps the entry's
    /// access count and last-access time. An entry found expired is removed
    /// by this call and reported as a miss.
    pub fn get(&self, key: &K) -> Option<V> {
        let mut guard = self.inner.lock();
        let inner = &mut *guard;
        let now = Instant::now();

        if let Some(entry) = inner.entries.get_mut(key) {
            if !entry.is_expired(now) {
                entry.touch(now);
                inner.stats.record_hit();
                return Some(entry.value.clone());
            }
        } else {
            inner.stats.record_miss();
            return None;
        }

        // Present but past its TTL: reclaim it now.
        inner.entries.remove(key);
        inner.stats.record_miss();
        debug!("dropped expired entry on read");
        None
    }

    // == Contains ==
    /// Checks whether a live entry exists for `key`.
    ///
    /// Applies the same lazy expiry as [`get`](Self::get), removing an entry
    /// it finds expired, but touches neither the entry bookkeeping nor the
    /// hit/miss counters.
    pub fn contains_key(&self, key: &K) -> bool {
        let mut inner = self.inner.lock();
        let now = Instant::now();

        let expired = match inner.entries.get(key) {
            Some(entry) => entry.is_expired(now),
            None => return false,
        };
        if expired {
            inner.entries.remove(key);
            return false;
        }
        true
    }

    // == Delete ==
    /// Removes an entry by key, expired or not.
    ///
    /// Returns true if an entry was removed.
    pub fn delete(&self, key: &K) -> bool {
        self.inner.lock().entries.remove(key).is_some()
    }

    // == Clear ==
    /// Removes every entry and resets the statistics counters.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.entries.clear();
        inner.stats = CacheStats::new();
    }

    // == Length ==
    /// Returns the current number of stored entries, not-yet-reclaimed
    /// expired ones included.
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }

    // == Enumeration Views ==
    /// Snapshot of all stored keys, in no particular order.
    ///
    /// Expiry-blind: a key whose entry would expire on its next read is still
    /// listed.
    pub fn keys(&self) -> Vec<K> {
        self.inner.lock().entries.keys().cloned().collect()
    }

    /// Snapshot of all stored values, without bookkeeping.
    pub fn values(&self) -> Vec<V> {
        self.inner
            .lock()
            .entries
            .values()
            .map(|entry| entry.value.clone())
            .collect()
    }

    /// Snapshot of all stored key-value pairs, without bookkeeping.
    pub fn entries(&self) -> Vec<(K, V)> {
        self.inner
            .lock()
            .entries
            .iter()
            .map(|(key, entry)| (key.clone(), entry.value.clone()))
            .collect()
    }

    // == Accessors ==
    /// Capacity bound.
    pub fn max_size(&self) -> usize {
        self.inner.lock().max_size
    }

    /// TTL applied when `set` receives none.
    pub fn default_ttl(&self) -> Duration {
        self.inner.lock().default_ttl
    }

    /// Configured eviction strategy.
    pub fn strategy(&self) -> EvictionStrategy {
        self.inner.lock().strategy
    }

    // == Stats ==
    /// Returns a statistics snapshot.
    ///
    /// `size` counts every stored entry, while the age aggregates cover only
    /// entries that are live at snapshot time. An empty store yields zeros
    /// throughout.
    pub fn stats(&self) -> CacheStats {
        let inner = self.inner.lock();
        let now = Instant::now();

        let mut stats = inner.stats.clone();
        stats.size = inner.entries.len();
        stats.max_size = inner.max_size;
        stats.refresh_hit_rate();

        let ages: Vec<Duration> = inner
            .entries
            .values()
            .filter(|entry| !entry.is_expired(now))
            .map(|entry| entry.age(now))
            .collect();
        if !ages.is_empty() {
            stats.oldest_age = ages.iter().copied().max().unwrap_or_default();
            stats.newest_age = ages.iter().copied().min().unwrap_or_default();
            stats.average_age = ages.iter().sum::<Duration>() / ages.len() as u32;
        }

        stats
    }
}
