//! Dish request body

use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

/// Dish fields as sent by the client (`data` member of the body).
///
/// Every field is optional raw JSON here; presence and shape are checked by
/// `DishService` so that all violations are reported at once, including a
/// number where text was expected.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct DishPayload {
    /// Only meaningful on update, where it must match the route id
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub id: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "Dolcelatte and chickpea spaghetti")]
    pub name: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: Option<Value>,
    /// Must be an integer greater than 0
    #[serde(default)]
    #[schema(value_type = Option<u64>, example = 19)]
    pub price: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub image_url: Option<Value>,
}
