//! Memoized Population Module
//!
//! "Get from cache, or fetch once and cache the result": collapses concurrent
//! fetches for the same missing key into a single computation that every
//! caller awaits.

use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use futures::future::{BoxFuture, Shared};
use futures::FutureExt;
use parking_lot::Mutex;
use tracing::debug;

use crate::cache::CacheStore;
use crate::error::{CacheError, Result};

/// Handle to one pending fetch; every waiter for the key awaits a clone.
type Flight<V> = Shared<BoxFuture<'static, Result<V>>>;

/// Memoized fetch helper over a [`CacheStore`].
///
/// A miss starts the supplied producer at most once per key at a time;
/// callers that miss while that computation is pending attach to it instead
/// of fetching again. The computation runs as a detached task, so a caller
/// that stops waiting (under a timeout, say) does not cancel it for the
/// others, and a finished fetch still lands in the store even if nobody is
/// left waiting for it.
pub struct Memoizer<K, V> {
    store: CacheStore<K, V>,
    /// Pending fetches by key, for duplicate callers to attach to
    in_flight: Arc<Mutex<HashMap<K, Flight<V>>>>,
}

impl<K, V> Clone for Memoizer<K, V> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            in_flight: Arc::clone(&self.in_flight),
        }
    }
}

impl<K, V> Memoizer<K, V>
where
    K: Eq + Hash + Clone + Send + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Creates a memoizer over `store`. Clones share the in-flight registry,
    /// so deduplication spans every handle built from the same memoizer.
    pub fn new(store: CacheStore<K, V>) -> Self {
        Self {
            store,
            in_flight: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// The wrapped store handle.
    pub fn store(&self) -> &CacheStore<K, V> {
        &self.store
    }

    /// Number of fetches currently pending.
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.lock().len()
    }

    /// Returns the cached value for `key`, fetching it with `producer` on a
    /// miss.
    ///
    /// On a hit the producer is never invoked. On a miss, concurrent callers
    /// for the same key share one computation and observe the same value or
    /// the same error. A successful fetch is written to the store (under
    /// `ttl`, or the store's default) before any waiter resumes; a failure is
    /// handed to every current waiter as [`CacheError::FetchFailed`] and is
    /// not cached, so the next call retries from scratch.
    pub async fn get_or_populate<F, Fut>(
        &self,
        key: K,
        producer: F,
        ttl: Option<Duration>,
    ) -> Result<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = anyhow::Result<V>> + Send + 'static,
    {
        if let Some(value) = self.store.get(&key) {
            return Ok(value);
        }

        let flight = {
            let mut in_flight = self.in_flight.lock();
            if let Some(flight) = in_flight.get(&key) {
                debug!("attached to in-flight fetch");
                flight.clone()
            } else if let Some(value) = self.store.get(&key) {
                // A fetch settled between the miss above and taking the
                // registry lock; its result is already stored.
                return Ok(value);
            } else {
                let flight = self.spawn_flight(key.clone(), producer(), ttl);
                in_flight.insert(key, flight.clone());
                flight
            }
        };

        flight.await
    }

    /// Spawns the fetch as a detached task and returns the shared future
    /// every waiter polls.
    ///
    /// The registry entry is removed by the task itself once the fetch
    /// settles, success or failure, so an abandoned flight can never wedge
    /// the key.
    fn spawn_flight<Fut>(&self, key: K, fut: Fut, ttl: Option<Duration>) -> Flight<V>
    where
        Fut: Future<Output = anyhow::Result<V>> + Send + 'static,
    {
        let store = self.store.clone();
        let in_flight = Arc::clone(&self.in_flight);

        let task = tokio::spawn(async move {
            // The producer runs in its own task so that a panic inside it is
            // contained as a JoinError and the registry cleanup below still
            // runs when the fetch settles.
            let result = match tokio::spawn(fut).await {
                Ok(Ok(value)) => {
                    store.set(key.clone(), value.clone(), ttl);
                    Ok(value)
                }
                Ok(Err(err)) => {
                    debug!("fetch failed: {:#}", err);
                    Err(CacheError::fetch_failed(err))
                }
                Err(join_err) => Err(CacheError::fetch_failed(anyhow::anyhow!(
                    "fetch task failed: {}",
                    join_err
                ))),
            };
            in_flight.lock().remove(&key);
            result
        });

        async move {
            match task.await {
                Ok(result) => result,
                Err(join_err) => Err(CacheError::fetch_failed(anyhow::anyhow!(
                    "fetch task failed: {}",
                    join_err
                ))),
            }
        }
        .boxed()
        .shared()
    }
}
