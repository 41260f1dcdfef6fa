//! Response envelopes and the HTTP error type
//!
//! - `DataResponse<T>`: success body, `{ "data": ... }`
//! - `ErrorResponse`: failure body, `{ "error": "..." }`
//! - `ApiError`: status + message, converts service errors

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::gateway::services::{DishError, OrderError};

// ============================================================================
// Envelopes
// ============================================================================

/// Success envelope shared by every endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Error envelope
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Dish must include a name")]
    pub error: String,
}

// ============================================================================
// ApiError
// ============================================================================

/// Classified failure surfaced to the client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

pub type ApiResult<T> = Result<(StatusCode, Json<DataResponse<T>>), ApiError>;

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(StatusCode::METHOD_NOT_ALLOWED, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

fn status_from(code: u16) -> StatusCode {
    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

impl From<DishError> for ApiError {
    fn from(e: DishError) -> Self {
        tracing::debug!("[API] {} -> {}", e.code(), e.http_status());
        Self::new(status_from(e.http_status()), e.to_string())
    }
}

impl From<OrderError> for ApiError {
    fn from(e: OrderError) -> Self {
        tracing::debug!("[API] {} -> {}", e.code(), e.http_status());
        Self::new(status_from(e.http_status()), e.to_string())
    }
}

/// 200 with `{ data }`
pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(DataResponse { data })))
}

/// 201 with `{ data }`
pub fn created<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}
