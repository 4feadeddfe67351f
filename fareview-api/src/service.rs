use std::sync::Arc;
use std::time::Duration;

use fareview_core::{FlightSearchClient, SearchError, SearchParams, SearchResult};
use fareview_store::{ResultStore, SingleFlight};
use tokio::sync::broadcast;
use tracing::{error, info};

use crate::notifications::Notification;

type Completed = Result<(u64, Arc<SearchResult>), SearchError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchFailure {
    #[error("A search for this route and dates is already running")]
    InFlight,
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Outcome of one search as seen by one caller.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub request_id: u64,
    pub params: SearchParams,
    pub result: Arc<SearchResult>,
    /// True when this caller joined a search another caller started.
    pub coalesced: bool,
}

/// Runs searches against the configured backend.
///
/// Identical concurrent searches share one backend call, every call is
/// bounded by `timeout`, and completed results go to the result store.
/// An admitted search runs to completion even if its callers go away.
/// A failed search publishes one notification no matter how many callers
/// were waiting on it. Callers must not publish another.
pub struct SearchService {
    client: Arc<dyn FlightSearchClient>,
    store: Arc<ResultStore>,
    notifications: broadcast::Sender<Notification>,
    flights: SingleFlight<SearchParams, Completed>,
    timeout: Duration,
    coalesce: bool,
}

impl SearchService {
    pub fn new(
        client: Arc<dyn FlightSearchClient>,
        store: Arc<ResultStore>,
        notifications: broadcast::Sender<Notification>,
        timeout: Duration,
        coalesce: bool,
    ) -> Self {
        Self {
            client,
            store,
            notifications,
            flights: SingleFlight::new(),
            timeout,
            coalesce,
        }
    }

    pub async fn search(&self, params: SearchParams) -> Result<SearchOutcome, SearchFailure> {
        // runs only on admission; the request id is drawn here, not on first poll
        let start = || {
            let request_id = self.store.next_request_id();
            let client = self.client.clone();
            let store = self.store.clone();
            let notifications = self.notifications.clone();
            let timeout = self.timeout;
            let params = params.clone();
            execute(client, store, notifications, timeout, request_id, params)
        };

        let (completed, coalesced) = if self.coalesce {
            let (completed, leader) = self.flights.run(params.clone(), start).await;
            (completed, !leader)
        } else {
            let completed = self
                .flights
                .try_run(params.clone(), start)
                .await
                .map_err(|_| SearchFailure::InFlight)?;
            (completed, false)
        };

        let (request_id, result) = completed?;
        Ok(SearchOutcome {
            request_id,
            params,
            result,
            coalesced,
        })
    }
}

async fn execute(
    client: Arc<dyn FlightSearchClient>,
    store: Arc<ResultStore>,
    notifications: broadcast::Sender<Notification>,
    timeout: Duration,
    request_id: u64,
    params: SearchParams,
) -> Completed {
    info!(
        "Search #{} {} -> {} on {} via {}",
        request_id,
        params.origin,
        params.destination,
        params.depart_date,
        client.name()
    );

    let outcome = match tokio::time::timeout(timeout, client.search_flights(&params)).await {
        Ok(outcome) => outcome,
        Err(_) => Err(SearchError::Timeout),
    };

    match outcome {
        Ok(result) => {
            let message = format!(
                "Found {} daily fares for {} -> {}",
                result.price_trends.len(),
                params.origin,
                params.destination
            );
            store.publish(request_id, params, result.clone());
            // no subscribers is fine
            let _ = notifications.send(Notification::info(message));
            Ok((request_id, Arc::new(result)))
        }
        Err(e) => {
            error!("Search #{} failed: {}", request_id, e);
            let _ = notifications.send(Notification::error(format!("Flight search failed: {}", e)));
            Err(e)
        }
    }
}
