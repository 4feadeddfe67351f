use std::time::Duration;

use async_trait::async_trait;
use fareview_core::{FlightSearchClient, SearchError, SearchParams, SearchResult};
use tracing::{error, info};

/// Search backend reached over HTTP: `POST {base_url}/v1/search` with the
/// search parameters as JSON, answered with a `SearchResult`.
pub struct HttpSearchClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpSearchClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, SearchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SearchError::Internal(e.to_string()))?;
        Ok(Self {
            http,
            endpoint: format!("{}/v1/search", base_url.trim_end_matches('/')),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl FlightSearchClient for HttpSearchClient {
    async fn search_flights(&self, params: &SearchParams) -> Result<SearchResult, SearchError> {
        info!("Searching {} -> {} via {}", params.origin, params.destination, self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .json(params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SearchError::Timeout
                } else {
                    SearchError::Unavailable(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("Search backend returned {}: {}", status, message);
            return Err(SearchError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<SearchResult>()
            .await
            .map_err(|e| SearchError::InvalidResponse(e.to_string()))
    }

    fn name(&self) -> &'static str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::post, Json, Router};
    use chrono::NaiveDate;
    use fareview_core::{AirportCode, PriceTrendPoint};

    fn params() -> SearchParams {
        let date = NaiveDate::from_ymd_opt(2025, 9, 1).unwrap();
        SearchParams {
            origin: AirportCode::parse("SEA").unwrap(),
            destination: AirportCode::parse("SFO").unwrap(),
            depart_date: date,
            return_date: date,
            passengers: 1,
        }
    }

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_decodes_backend_result() {
        let router = Router::new().route(
            "/v1/search",
            post(|Json(p): Json<SearchParams>| async move {
                Json(SearchResult {
                    price_trends: vec![PriceTrendPoint {
                        date: p.depart_date,
                        price: 199.0,
                        is_lowest_price: true,
                    }],
                    insights: vec![],
                })
            }),
        );
        let base = serve(router).await;

        let client = HttpSearchClient::new(&format!("{}/", base), Duration::from_secs(5)).unwrap();
        assert_eq!(client.endpoint(), format!("{}/v1/search", base));

        let result = client.search_flights(&params()).await.unwrap();
        assert_eq!(result.price_trends.len(), 1);
        assert_eq!(result.price_trends[0].date, params().depart_date);
    }

    #[tokio::test]
    async fn test_maps_error_status() {
        let router = Router::new().route(
            "/v1/search",
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "maintenance") }),
        );
        let base = serve(router).await;

        let client = HttpSearchClient::new(&base, Duration::from_secs(5)).unwrap();
        let err = client.search_flights(&params()).await.unwrap_err();
        assert_eq!(
            err,
            SearchError::Upstream {
                status: 503,
                message: "maintenance".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_rejects_malformed_body() {
        let router = Router::new().route("/v1/search", post(|| async { "not json" }));
        let base = serve(router).await;

        let client = HttpSearchClient::new(&base, Duration::from_secs(5)).unwrap();
        let err = client.search_flights(&params()).await.unwrap_err();
        assert!(matches!(err, SearchError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_times_out_on_slow_backend() {
        let router = Router::new().route(
            "/v1/search",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                "late"
            }),
        );
        let base = serve(router).await;

        let client = HttpSearchClient::new(&base, Duration::from_millis(100)).unwrap();
        let err = client.search_flights(&params()).await.unwrap_err();
        assert_eq!(err, SearchError::Timeout);
    }
}
