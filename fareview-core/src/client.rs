use async_trait::async_trait;

use crate::search::{SearchParams, SearchResult};

/// Failures a search backend can report. `Clone` so one failure can be
/// handed to every caller that coalesced onto the same search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("Flight search timed out")]
    Timeout,
    #[error("Flight search service unavailable: {0}")]
    Unavailable(String),
    #[error("Flight search service returned {status}: {message}")]
    Upstream { status: u16, message: String },
    #[error("Flight search service sent an invalid response: {0}")]
    InvalidResponse(String),
    #[error("Flight search failed: {0}")]
    Internal(String),
}

/// The stable search contract. The mock and the HTTP backend both sit behind it,
/// so callers never change when the backend does.
#[async_trait]
pub trait FlightSearchClient: Send + Sync {
    async fn search_flights(&self, params: &SearchParams) -> Result<SearchResult, SearchError>;

    /// Short name used in logs.
    fn name(&self) -> &'static str;
}
