//! HTTP handlers, one module per resource
//!
//! Glob re-exports carry the `__path_*` items generated by `#[utoipa::path]`
//! along with the handlers, so `ApiDoc` can name them through this module.

pub mod dish;
pub mod fallback;
pub mod health;
pub mod order;

pub use dish::*;
pub use fallback::{method_not_allowed, not_found};
pub use health::*;
pub use order::*;
