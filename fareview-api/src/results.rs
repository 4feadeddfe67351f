use axum::{extract::State, routing::get, Json, Router};
use fareview_pricing::{render_insight_panel, render_price_chart, summarize, InsightCard, PriceChart, PriceSummary};
use fareview_store::StoredResult;
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartResponse {
    #[serde(flatten)]
    pub chart: PriceChart,
    pub summary: Option<PriceSummary>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/results/latest", get(latest_result))
        .route("/v1/results/latest/chart", get(latest_chart))
        .route("/v1/results/latest/insights", get(latest_insights))
}

/// GET /v1/results/latest
pub async fn latest_result(State(state): State<AppState>) -> Result<Json<StoredResult>, AppError> {
    state
        .store
        .latest()
        .map(|latest| Json(latest.as_ref().clone()))
        .ok_or_else(|| AppError::NotFoundError("No search results yet".to_string()))
}

/// GET /v1/results/latest/chart
/// Falls back to the sample series until a search completes.
pub async fn latest_chart(State(state): State<AppState>) -> Json<ChartResponse> {
    let latest = state.store.latest();
    let points = latest.as_ref().map(|l| l.result.price_trends.as_slice()).unwrap_or(&[]);

    let chart = render_price_chart(points, state.today());
    let summary = if chart.is_sample { None } else { summarize(points) };
    Json(ChartResponse { chart, summary })
}

/// GET /v1/results/latest/insights
pub async fn latest_insights(State(state): State<AppState>) -> Json<Vec<InsightCard>> {
    let latest = state.store.latest();
    let insights = latest.as_ref().map(|l| l.result.insights.as_slice()).unwrap_or(&[]);
    Json(render_insight_panel(insights))
}
