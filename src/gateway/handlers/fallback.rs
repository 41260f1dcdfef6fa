//! Fallbacks for unknown paths and unsupported verbs

use axum::http::{Method, Uri};

use super::super::types::ApiError;

/// Any verb a known path does not support
pub async fn method_not_allowed(method: Method, uri: Uri) -> ApiError {
    tracing::warn!("[GATEWAY] {} not allowed for {}", method, uri.path());
    ApiError::method_not_allowed(format!("{} not allowed for {}", method, uri.path()))
}

/// Any path outside the route table
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("Path not found: {}", uri.path()))
}
