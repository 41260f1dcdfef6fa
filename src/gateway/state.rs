use crate::gateway::services::{DishService, OrderService};
use crate::models::{Dish, Order};
use crate::store::{Store, StoreError};

/// Gateway application state (shared behind `Arc`)
#[derive(Default)]
pub struct AppState {
    pub dishes: DishService,
    pub orders: OrderService,
}

impl AppState {
    /// Empty stores
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores pre-populated with existing records
    pub fn with_records(dishes: Vec<Dish>, orders: Vec<Order>) -> Result<Self, StoreError> {
        Ok(Self {
            dishes: DishService::with_store(Store::from_records(dishes)?),
            orders: OrderService::with_store(Store::from_records(orders)?),
        })
    }
}
