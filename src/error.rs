//! Error types for the cache engine
//!
//! Provides unified error handling using thiserror.

use std::sync::Arc;

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache engine.
///
/// The store itself never fails: a miss is an ordinary `None`/`false` return.
/// Errors arise only at construction time and from the producer supplied to a
/// memoized fetch.
#[derive(Error, Debug, Clone)]
pub enum CacheError {
    /// Configuration rejected at construction time
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// The producer behind a memoized fetch failed.
    ///
    /// The underlying error is reference-counted so that every waiter attached
    /// to the same in-flight fetch receives the identical failure.
    #[error("Fetch failed: {0}")]
    FetchFailed(Arc<anyhow::Error>),
}

impl CacheError {
    /// Wraps a producer error for distribution to all waiters.
    pub(crate) fn fetch_failed(err: anyhow::Error) -> Self {
        Self::FetchFailed(Arc::new(err))
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cache engine.
pub type Result<T> = std::result::Result<T, CacheError>;
