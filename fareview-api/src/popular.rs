use axum::{extract::Query, routing::get, Json, Router};
use fareview_core::routes::{suggest_routes, PopularRoute, DEFAULT_SUGGESTIONS};
use serde::Deserialize;

use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PopularQuery {
    pub count: Option<usize>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/routes/popular", get(popular_routes))
}

/// GET /v1/routes/popular?count=N
pub async fn popular_routes(Query(query): Query<PopularQuery>) -> Json<Vec<PopularRoute>> {
    let count = query.count.unwrap_or(DEFAULT_SUGGESTIONS);
    Json(suggest_routes(&mut rand::thread_rng(), count))
}
