use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Error response type
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Custom error type for API endpoints
///
/// Every handler returns this on failure so that all endpoints share the same
/// status code mapping and the same `{"detail": ...}` JSON body.
#[derive(Debug)]
pub enum ApiError {
    /// No todo with this id in the collection
    TodoNotFound(String),
    /// Request body parsed but violates a field constraint
    Validation(String),
    /// Request body is not JSON of the expected shape
    JsonError(serde_json::Error),
    /// Request body could not be read at all
    BodyRead(BytesRejection),
    /// Reading or writing the data file failed
    Storage(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::TodoNotFound(id) => {
                tracing::warn!("Todo not found: {}", id);
                (StatusCode::NOT_FOUND, "Todo not found".to_string())
            }
            ApiError::Validation(msg) => {
                tracing::warn!("Validation failed: {}", msg);
                (StatusCode::UNPROCESSABLE_ENTITY, msg)
            }
            ApiError::JsonError(err) => {
                tracing::warn!("Rejected request body: {}", err);
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    format!("JSON parse error: {}", err),
                )
            }
            ApiError::BodyRead(rejection) => {
                tracing::warn!("Failed to read request body: {}", rejection);
                (rejection.status(), rejection.body_text())
            }
            ApiError::Storage(err) => {
                tracing::error!("Storage error: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Storage error: {:#}", err),
                )
            }
        };

        (status, Json(ErrorResponse { detail })).into_response()
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Storage(err)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::JsonError(err)
    }
}
