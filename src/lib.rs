//! Memocache - a bounded in-memory cache
//!
//! Provides a generic key-value store with TTL expiry, pluggable eviction
//! strategies, usage statistics, memoized single-flight population and bulk
//! helpers.

pub mod bulk;
pub mod cache;
pub mod config;
pub mod error;
pub mod populate;

pub use bulk::{invalidate_matching, warm};
pub use cache::{CacheEntry, CacheStats, CacheStore, EvictionStrategy};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use populate::Memoizer;
