//! Initial data loaded into the stores at startup.
//!
//! The seed file is JSON: `{ "dishes": [...], "orders": [...] }` using the
//! same record shapes the API returns. Records are checked against the
//! model invariants before the server starts.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::gateway::state::AppState;
use crate::models::{Dish, Order};
use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid seed dish {id}: {reason}")]
    InvalidDish { id: String, reason: &'static str },

    #[error("Invalid seed order {id}: {reason}")]
    InvalidOrder { id: String, reason: &'static str },

    #[error("Seed data rejected: {0}")]
    Store(#[from] StoreError),
}

#[derive(Debug, Default, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

impl SeedData {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SeedError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self, SeedError> {
        let seed: SeedData = serde_json::from_str(content)?;
        seed.check()?;
        Ok(seed)
    }

    fn check(&self) -> Result<(), SeedError> {
        for dish in &self.dishes {
            let reason = if dish.id.is_empty() {
                Some("empty id")
            } else if dish.price == 0 {
                Some("price must be greater than 0")
            } else if dish.name.is_empty() || dish.description.is_empty() || dish.image_url.is_empty() {
                Some("empty text field")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(SeedError::InvalidDish {
                    id: dish.id.clone(),
                    reason,
                });
            }
        }

        for order in &self.orders {
            let reason = if order.id.is_empty() {
                Some("empty id")
            } else if order.dishes.is_empty() {
                Some("no dishes")
            } else if order.dishes.iter().any(|line| line.quantity == 0) {
                Some("quantity must be greater than 0")
            } else if order.deliver_to.is_empty() || order.mobile_number.is_empty() {
                Some("empty text field")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(SeedError::InvalidOrder {
                    id: order.id.clone(),
                    reason,
                });
            }
        }
        Ok(())
    }

    /// Build the application state; duplicate ids are rejected here
    pub fn into_state(self) -> Result<AppState, SeedError> {
        Ok(AppState::with_records(self.dishes, self.orders)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OrderStatus;

    const SEED: &str = r#"{
        "dishes": [
            { "id": "1", "name": "Dolcelatte and chickpea spaghetti", "description": "Spaghetti topped with a blend of dolcelatte and fresh chickpeas", "price": 19, "image_url": "https://images.example.com/spaghetti.jpg" }
        ],
        "orders": [
            { "id": "1", "deliverTo": "308 Negra Arroyo Lane, Albuquerque, NM", "mobileNumber": "(505) 143-3369", "status": "delivered", "dishes": [{ "dishId": "1", "quantity": 2 }] }
        ]
    }"#;

    #[test]
    fn test_seed_builds_state() {
        let state = SeedData::from_json_str(SEED).unwrap().into_state().unwrap();
        assert_eq!(state.dishes.len(), 1);
        assert_eq!(state.orders.read("1").unwrap().status, OrderStatus::Delivered);
    }

    #[test]
    fn test_empty_document_is_allowed() {
        let state = SeedData::from_json_str("{}").unwrap().into_state().unwrap();
        assert!(state.dishes.is_empty());
        assert!(state.orders.is_empty());
    }

    #[test]
    fn test_unknown_status_rejected() {
        let seed = SEED.replace("\"delivered\"", "\"lost\"");
        assert!(matches!(
            SeedData::from_json_str(&seed),
            Err(SeedError::Parse(_))
        ));
    }

    #[test]
    fn test_zero_price_rejected() {
        let seed = SEED.replace("\"price\": 19", "\"price\": 0");
        let err = SeedData::from_json_str(&seed).unwrap_err();
        assert!(matches!(err, SeedError::InvalidDish { .. }));
    }

    #[test]
    fn test_order_without_dishes_rejected() {
        let seed = SEED.replace(r#"[{ "dishId": "1", "quantity": 2 }]"#, "[]");
        let err = SeedData::from_json_str(&seed).unwrap_err();
        assert_eq!(err.to_string(), "Invalid seed order 1: no dishes");
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let seed = SeedData {
            dishes: Vec::new(),
            orders: vec![
                SeedData::from_json_str(SEED).unwrap().orders[0].clone(),
                SeedData::from_json_str(SEED).unwrap().orders[0].clone(),
            ],
        };
        assert!(matches!(
            seed.into_state(),
            Err(SeedError::Store(StoreError::DuplicateId(id))) if id == "1"
        ));
    }
}
