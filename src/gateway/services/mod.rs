//! Gateway Services Layer
//!
//! Business logic for dishes and orders. Handlers are thin HTTP adapters
//! that delegate here; each service owns its store exclusively.

pub mod dish;
pub mod order;
pub mod validation;

pub use dish::{DishError, DishService};
pub use order::{OrderError, OrderService};
