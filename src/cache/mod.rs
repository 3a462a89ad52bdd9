//! Cache Module
//!
//! Provides bounded in-memory caching with TTL expiry and pluggable eviction.

mod entry;
mod eviction;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use eviction::EvictionStrategy;
pub use stats::CacheStats;
pub use store::CacheStore;
