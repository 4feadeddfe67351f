use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use fareview_core::{SearchError, ValidationError};
use serde_json::json;

use crate::service::SearchFailure;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFoundError(String),
    ConflictError(String),
    UpstreamError(String),
    ServiceUnavailable(String),
    GatewayTimeout(String),
    InternalServerError(String),
    Anyhow(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::ConflictError(msg) => (StatusCode::CONFLICT, msg),
            AppError::UpstreamError(msg) => (StatusCode::BAD_GATEWAY, msg),
            AppError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            AppError::GatewayTimeout(msg) => (StatusCode::GATEWAY_TIMEOUT, msg),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            },
            AppError::Anyhow(err) => {
                tracing::error!("Internal Server Error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            },
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::Timeout => AppError::GatewayTimeout(err.to_string()),
            SearchError::Unavailable(_) => AppError::ServiceUnavailable(err.to_string()),
            SearchError::Upstream { .. } | SearchError::InvalidResponse(_) => {
                AppError::UpstreamError(err.to_string())
            }
            SearchError::Internal(msg) => AppError::InternalServerError(msg),
        }
    }
}

impl From<SearchFailure> for AppError {
    fn from(err: SearchFailure) -> Self {
        match err {
            SearchFailure::InFlight => AppError::ConflictError(err.to_string()),
            SearchFailure::Search(e) => e.into(),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::Anyhow(err)
    }
}
