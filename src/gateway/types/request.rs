//! Request body extraction
//!
//! Every write endpoint takes `{ "data": { ... } }`. `DataBody<T>` unwraps
//! the envelope at the framework level and turns JSON failures into the
//! same `{ "error": ... }` shape the services use.

use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::{Deserialize, de::DeserializeOwned};

use super::response::ApiError;

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
}

/// Payload inside the `data` envelope. A body without `data` yields
/// `T::default()`, which then fails field validation.
#[derive(Debug)]
pub struct DataBody<T>(pub T);

impl<S, T> FromRequest<S> for DataBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(envelope): Json<Envelope<T>> = Json::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid JSON: {}", e.body_text())))?;

        Ok(DataBody(envelope.data.unwrap_or_default()))
    }
}
