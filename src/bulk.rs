//! Bulk Operations Module
//!
//! Pattern-based invalidation and bulk preloading over a cache store.

use std::fmt::Display;
use std::hash::Hash;

use regex::Regex;
use tracing::debug;

use crate::cache::CacheStore;

/// Deletes every entry whose key's string form matches `pattern`.
///
/// The match is a substring search; anchor the pattern to force a full-key
/// match. Keys are snapshotted up front, so entries inserted while the
/// deletions run are left alone. Returns the number of entries removed.
pub fn invalidate_matching<K, V>(store: &CacheStore<K, V>, pattern: &Regex) -> usize
where
    K: Eq + Hash + Clone + Display,
    V: Clone,
{
    let mut removed = 0;
    for key in store.keys() {
        if pattern.is_match(&key.to_string()) && store.delete(&key) {
            removed += 1;
        }
    }

    if removed > 0 {
        debug!("invalidated {} entries matching {}", removed, pattern);
    }
    removed
}

/// Preloads `entries` into the store in iteration order, under the store's
/// default TTL.
///
/// Each pair goes through the ordinary insert path, so the capacity bound and
/// eviction behavior apply and later pairs overwrite earlier ones when keys
/// repeat.
pub fn warm<K, V, I>(store: &CacheStore<K, V>, entries: I)
where
    K: Eq + Hash + Clone,
    V: Clone,
    I: IntoIterator<Item = (K, V)>,
{
    let mut loaded = 0;
    for (key, value) in entries {
        store.set(key, value, None);
        loaded += 1;
    }
    debug!("warmed cache with {} entries", loaded);
}
