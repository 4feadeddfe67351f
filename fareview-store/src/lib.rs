pub mod app_config;
pub mod http_client;
pub mod mock_client;
pub mod result_store;
pub mod single_flight;

use std::sync::Arc;
use std::time::Duration;

use fareview_core::{FlightSearchClient, SearchError};

pub use app_config::{Config, SearchBackend, SearchConfig};
pub use http_client::HttpSearchClient;
pub use mock_client::MockSearchClient;
pub use result_store::{ResultStore, StoredResult};
pub use single_flight::SingleFlight;

/// Build the configured search backend.
pub fn build_search_client(config: &SearchConfig) -> Result<Arc<dyn FlightSearchClient>, SearchError> {
    let client: Arc<dyn FlightSearchClient> = match config.backend {
        SearchBackend::Mock => Arc::new(MockSearchClient::new(
            Duration::from_millis(config.mock_delay_ms),
            config.seed,
        )),
        SearchBackend::Http => {
            let base_url = config.base_url.as_deref().ok_or_else(|| {
                SearchError::Internal("search.base_url is required for the http backend".to_string())
            })?;
            Arc::new(HttpSearchClient::new(base_url, Duration::from_millis(config.timeout_ms))?)
        }
    };
    tracing::info!("Using {} flight search backend", client.name());
    Ok(client)
}
