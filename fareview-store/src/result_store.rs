use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use fareview_core::{SearchParams, SearchResult};
use serde::Serialize;
use tokio::sync::watch;

/// The latest completed search, as held by [`ResultStore`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredResult {
    pub key: &'static str,
    pub request_id: u64,
    pub params: SearchParams,
    pub result: SearchResult,
    pub completed_at: DateTime<Utc>,
}

/// Holds the latest search result for the chart and insight views.
///
/// Owned by the composition root and passed in. Every search draws a
/// request id before it starts; a result older than the stored one is
/// discarded, so a slow search never overwrites a newer one.
pub struct ResultStore {
    next_request_id: AtomicU64,
    latest: watch::Sender<Option<Arc<StoredResult>>>,
}

impl ResultStore {
    pub const LATEST_KEY: &'static str = "flight-search-results";

    pub fn new() -> Self {
        let (latest, _) = watch::channel(None);
        Self {
            next_request_id: AtomicU64::new(0),
            latest,
        }
    }

    /// Monotonically increasing, starting at 1.
    pub fn next_request_id(&self) -> u64 {
        self.next_request_id.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Store a result unless a newer request already landed.
    /// Returns whether the result was stored.
    pub fn publish(&self, request_id: u64, params: SearchParams, result: SearchResult) -> bool {
        let stored = self.latest.send_if_modified(|current| {
            if current.as_ref().is_some_and(|c| c.request_id >= request_id) {
                return false;
            }
            *current = Some(Arc::new(StoredResult {
                key: Self::LATEST_KEY,
                request_id,
                params: params.clone(),
                result: result.clone(),
                completed_at: Utc::now(),
            }));
            true
        });

        if stored {
            tracing::debug!("Stored search result #{} under {}", request_id, Self::LATEST_KEY);
        } else {
            tracing::info!("Discarded stale search result #{}", request_id);
        }
        stored
    }

    pub fn latest(&self) -> Option<Arc<StoredResult>> {
        self.latest.borrow().clone()
    }
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new()
    }
}
