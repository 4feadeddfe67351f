use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use chrono::NaiveDate;
use fareview_core::airport::{max_selectable_date, min_selectable_date};
use fareview_core::validation::normalize_and_validate;
use fareview_core::{SearchForm, SearchParams, SearchResult};
use serde::Serialize;
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub request_id: u64,
    pub params: SearchParams,
    pub coalesced: bool,
    pub result: SearchResult,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormBounds {
    pub min_date: NaiveDate,
    pub max_date: NaiveDate,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/flights/search", post(search_flights))
        .route("/v1/search/form", get(form_bounds))
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /v1/flights/search
/// Normalize and validate the form, then run the search.
pub async fn search_flights(
    State(state): State<AppState>,
    Json(form): Json<SearchForm>,
) -> Result<Json<SearchResponse>, AppError> {
    let params = normalize_and_validate(&form, state.today()).map_err(|e| {
        info!("Rejected search {:?} -> {:?}: {}", form.origin, form.destination, e);
        AppError::from(e)
    })?;

    // the service already notified on failure
    let outcome = state.search.search(params).await?;

    Ok(Json(SearchResponse {
        request_id: outcome.request_id,
        params: outcome.params,
        coalesced: outcome.coalesced,
        result: (*outcome.result).clone(),
    }))
}

/// GET /v1/search/form
/// Date picker bounds for the search form.
pub async fn form_bounds(State(state): State<AppState>) -> Json<FormBounds> {
    let today = state.today();
    Json(FormBounds {
        min_date: min_selectable_date(today),
        max_date: max_selectable_date(today),
    })
}
