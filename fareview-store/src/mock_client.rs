use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use fareview_core::{FlightSearchClient, SearchError, SearchParams, SearchResult};
use fareview_pricing::generator::{default_insights, PriceSeriesConfig, PriceSeriesGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

/// Stand-in backend: waits a fixed delay, then synthesizes a price series
/// starting today and the fixed insight list.
pub struct MockSearchClient {
    delay: Duration,
    generator: PriceSeriesGenerator,
    rng: Mutex<StdRng>,
    calls: AtomicUsize,
}

impl MockSearchClient {
    pub fn new(delay: Duration, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            delay,
            generator: PriceSeriesGenerator::new(PriceSeriesConfig::default()),
            rng: Mutex::new(rng),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FlightSearchClient for MockSearchClient {
    async fn search_flights(&self, params: &SearchParams) -> Result<SearchResult, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;

        let today = chrono::Local::now().date_naive();
        let price_trends = {
            let mut rng = self
                .rng
                .lock()
                .map_err(|_| SearchError::Internal("mock price generator poisoned".to_string()))?;
            self.generator.generate(today, &mut *rng)
        };

        info!(
            "Mock search {} -> {} on {} ({} pax): {} price points",
            params.origin,
            params.destination,
            params.depart_date,
            params.passengers,
            price_trends.len()
        );

        Ok(SearchResult {
            price_trends,
            insights: default_insights(),
        })
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
