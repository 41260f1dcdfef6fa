//! Gateway types module
//!
//! ## Input Types
//! - [`DishPayload`], [`OrderPayload`]: loosely typed request bodies
//! - [`DataBody`]: Axum extractor for the `{ data }` request envelope
//!
//! ## Output Types
//! - [`DataResponse<T>`]: `{ data }` success envelope
//! - [`ApiError`]: `{ error }` failure with status code

pub mod dish;
pub mod order;
pub mod request;
pub mod response;

pub use dish::DishPayload;
pub use order::OrderPayload;
pub use request::DataBody;
pub use response::{ApiError, ApiResult, DataResponse, ErrorResponse, created, ok};
