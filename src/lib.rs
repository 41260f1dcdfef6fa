//! GrubDash - restaurant dishes and delivery orders over HTTP
//!
//! # Modules
//!
//! - [`models`] - Dish, Order and OrderStatus records
//! - [`store`] - Mutex-guarded in-memory collections
//! - [`id`] - Next-id allocation
//! - [`gateway`] - axum router, handlers and the dish/order services
//! - [`seed`] - Initial data loaded at startup
//! - [`config`] / [`logging`] - YAML configuration and tracing setup

pub mod config;
pub mod gateway;
pub mod id;
pub mod logging;
pub mod models;
pub mod seed;
pub mod store;

// Convenient re-exports at crate root
pub use config::{AppConfig, ConfigError};
pub use gateway::services::{DishError, DishService, OrderError, OrderService};
pub use gateway::state::AppState;
pub use models::{Dish, Order, OrderLine, OrderStatus};
pub use seed::{SeedData, SeedError};
pub use store::{Record, Store, StoreError};
