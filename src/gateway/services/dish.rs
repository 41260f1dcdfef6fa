//! Dish Service - validation and CRUD over the dish store
//!
//! Dishes are permanent menu items: they can be created, read and updated,
//! never deleted.

use thiserror::Error;

use crate::gateway::types::DishPayload;
use crate::models::Dish;
use crate::store::Store;

use super::validation::{Violations, is_present, mismatched_id, positive_integer, text};

/// Dish service error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DishError {
    /// One or more field rules failed; message lists all of them
    #[error("{0}")]
    Validation(String),

    #[error("Dish does not exist: {0}")]
    NotFound(String),

    #[error("Dish id does not match route id. Dish: {body_id}, Route: {route_id}")]
    IdMismatch { body_id: String, route_id: String },
}

impl DishError {
    pub fn code(&self) -> &'static str {
        match self {
            DishError::Validation(_) => "VALIDATION_FAILED",
            DishError::NotFound(_) => "DISH_NOT_FOUND",
            DishError::IdMismatch { .. } => "ID_MISMATCH",
        }
    }

    pub fn http_status(&self) -> u16 {
        match self {
            DishError::NotFound(_) => 404,
            DishError::Validation(_) | DishError::IdMismatch { .. } => 400,
        }
    }
}

/// Validated dish fields, everything but the id
#[derive(Debug, Clone, PartialEq, Eq)]
struct DishFields {
    name: String,
    description: String,
    price: u64,
    image_url: String,
}

impl DishFields {
    fn into_dish(self, id: String) -> Dish {
        Dish {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
            image_url: self.image_url,
        }
    }
}

/// Check every dish rule and collect all violations.
fn validate(payload: &DishPayload) -> Result<DishFields, DishError> {
    let name = text(payload.name.as_ref());
    let description = text(payload.description.as_ref());
    let price = positive_integer(payload.price.as_ref());
    let image_url = text(payload.image_url.as_ref());

    let mut violations = Violations::new();
    violations.check(name.is_none(), "Dish must include a name");
    violations.check(description.is_none(), "Dish must include a description");
    violations.check(
        !is_present(payload.price.as_ref()),
        "Dish must include a price",
    );
    violations.check(
        price.is_none(),
        "Dish must have a price that is an integer greater than 0",
    );
    violations.check(image_url.is_none(), "Dish must include a image_url");

    violations.into_result().map_err(DishError::Validation)?;

    match (name, description, price, image_url) {
        (Some(name), Some(description), Some(price), Some(image_url)) => Ok(DishFields {
            name: name.to_string(),
            description: description.to_string(),
            price,
            image_url: image_url.to_string(),
        }),
        // unreachable once every rule above passed
        _ => Err(DishError::Validation("Dish payload incomplete".to_string())),
    }
}

/// Dish Service - owns the dish store
#[derive(Default)]
pub struct DishService {
    store: Store<Dish>,
}

impl DishService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: Store<Dish>) -> Self {
        Self { store }
    }

    /// Every dish in creation order
    pub fn list(&self) -> Vec<Dish> {
        self.store.list()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Create a dish with a freshly allocated id
    pub fn create(&self, payload: DishPayload) -> Result<Dish, DishError> {
        let fields = validate(&payload).inspect_err(|e| {
            tracing::warn!("[DISH] Create rejected: {}", e);
        })?;

        let dish = self.store.insert_with(|id| fields.into_dish(id));
        tracing::info!("[DISH] Created dish {} ({})", dish.id, dish.name);
        Ok(dish)
    }

    pub fn read(&self, dish_id: &str) -> Result<Dish, DishError> {
        tracing::debug!("[DISH] Read dish {}", dish_id);
        self.store
            .get(dish_id)
            .ok_or_else(|| DishError::NotFound(dish_id.to_string()))
    }

    /// Replace every field but the id of an existing dish.
    ///
    /// Checks run in order: existence, body id vs route id, field rules.
    pub fn update(&self, dish_id: &str, payload: DishPayload) -> Result<Dish, DishError> {
        let result = self
            .store
            .update(dish_id, |dish| {
                if let Some(body_id) = mismatched_id(payload.id.as_ref(), dish_id) {
                    return Err(DishError::IdMismatch {
                        body_id,
                        route_id: dish_id.to_string(),
                    });
                }

                let fields = validate(&payload)?;
                *dish = fields.into_dish(dish.id.clone());
                Ok(())
            })
            .unwrap_or_else(|| Err(DishError::NotFound(dish_id.to_string())));

        match &result {
            Ok(dish) => tracing::info!("[DISH] Updated dish {}", dish.id),
            Err(e) => tracing::warn!("[DISH] Update of {} rejected: {}", dish_id, e),
        }
        result
    }
}
