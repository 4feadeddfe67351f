use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::{Arc, Mutex, MutexGuard};

use futures_util::future::{BoxFuture, FutureExt, Shared};

type InFlight<T> = Shared<BoxFuture<'static, T>>;
type InFlightMap<K, T> = Mutex<HashMap<K, InFlight<T>>>;

/// Returned by [`SingleFlight::try_run`] when the key is already running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("an identical request is already in flight")]
pub struct AlreadyInFlight;

/// At most one in-flight future per key.
///
/// Callers that arrive while a key is running join the existing future and
/// all receive a clone of its output. Admitted work is also driven by a
/// spawned task, so it runs to completion and its entry is cleared even
/// when every caller is dropped. The map lock is never held across an await.
///
/// Must be used from within a Tokio runtime.
pub struct SingleFlight<K, T> {
    inflight: Arc<InFlightMap<K, T>>,
}

fn lock<K, T>(inflight: &InFlightMap<K, T>) -> MutexGuard<'_, HashMap<K, InFlight<T>>> {
    inflight.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

// Clear the entry, but only if it still belongs to the future that just
// completed.
fn finish<K: Eq + Hash, T: Clone>(inflight: &InFlightMap<K, T>, key: &K, fut: &InFlight<T>) {
    let mut map = lock(inflight);
    if map.get(key).is_some_and(|current| current.ptr_eq(fut)) {
        map.remove(key);
    }
}

impl<K, T> SingleFlight<K, T>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            inflight: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    pub fn is_in_flight(&self, key: &K) -> bool {
        lock(&self.inflight).contains_key(key)
    }

    /// Join the running future for `key`, or start one with `start`.
    /// `start` runs only when the key is admitted. The bool is true for the
    /// caller that started it.
    pub async fn run<F, Fut>(&self, key: K, start: F) -> (T, bool)
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T> + Send + 'static,
    {
        let (fut, leader) = {
            let mut map = lock(&self.inflight);
            match map.get(&key) {
                Some(existing) => (existing.clone(), false),
                None => (self.admit(&mut map, key.clone(), start()), true),
            }
        };

        let output = fut.clone().await;
        finish(&self.inflight, &key, &fut);
        (output, leader)
    }

    /// Like [`run`](Self::run), but refuses to join a running future.
    pub async fn try_run<F, Fut>(&self, key: K, start: F) -> Result<T, AlreadyInFlight>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T> + Send + 'static,
    {
        let fut = {
            let mut map = lock(&self.inflight);
            if map.contains_key(&key) {
                return Err(AlreadyInFlight);
            }
            self.admit(&mut map, key.clone(), start())
        };

        let output = fut.clone().await;
        finish(&self.inflight, &key, &fut);
        Ok(output)
    }

    fn admit<Fut>(&self, map: &mut HashMap<K, InFlight<T>>, key: K, work: Fut) -> InFlight<T>
    where
        Fut: Future<Output = T> + Send + 'static,
    {
        let fut = work.boxed().shared();
        map.insert(key.clone(), fut.clone());

        let inflight = self.inflight.clone();
        let driven = fut.clone();
        tokio::spawn(async move {
            driven.clone().await;
            finish(&inflight, &key, &driven);
        });
        fut
    }
}

impl<K, T> Default for SingleFlight<K, T>
where
    K: Eq + Hash + Clone + Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
