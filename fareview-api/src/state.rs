use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use fareview_core::FlightSearchClient;
use fareview_store::{ResultStore, SearchConfig};
use tokio::sync::broadcast;

use crate::notifications::{Notification, CHANNEL_CAPACITY};
use crate::service::SearchService;

/// Source of "today" for validation and date bounds.
pub type Clock = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

pub fn local_clock() -> Clock {
    Arc::new(|| chrono::Local::now().date_naive())
}

#[derive(Clone)]
pub struct AppState {
    pub search: Arc<SearchService>,
    pub store: Arc<ResultStore>,
    pub notifications: broadcast::Sender<Notification>,
    pub clock: Clock,
}

impl AppState {
    pub fn new(client: Arc<dyn FlightSearchClient>, search: &SearchConfig) -> Self {
        let store = Arc::new(ResultStore::new());
        let (notifications, _) = broadcast::channel(CHANNEL_CAPACITY);
        let service = SearchService::new(
            client,
            store.clone(),
            notifications.clone(),
            Duration::from_millis(search.timeout_ms),
            search.coalesce,
        );

        Self {
            search: Arc::new(service),
            store,
            notifications,
            clock: local_clock(),
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }
}
