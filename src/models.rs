//! Core records held by the stores: `Dish`, `Order` and `OrderStatus`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

use crate::store::Record;

// ============================================================
// DISH
// ============================================================

/// Menu item. `id` never changes after creation, `price` is always > 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Dish {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "Dolcelatte and chickpea spaghetti")]
    pub name: String,
    pub description: String,
    /// Whole currency units
    #[schema(example = 19)]
    pub price: u64,
    pub image_url: String,
}

impl Record for Dish {
    fn id(&self) -> &str {
        &self.id
    }
}

// ============================================================
// ORDER STATUS
// ============================================================

/// Delivery status. `Delivered` is terminal: a delivered order can no longer
/// be changed, and only `Pending` orders may be deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// Parse the wire form; anything outside the four values is `None`.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    pub fn is_terminal(self) -> bool {
        self == OrderStatus::Delivered
    }

    /// Comma-joined list of every valid status, as shown in error messages
    pub fn valid_list() -> String {
        Self::ALL
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================
// ORDER
// ============================================================

/// One line of an order: which dish and how many.
///
/// Clients usually send the whole dish (`id`, `name`, `price`, ...) with a
/// quantity attached; everything beyond `dishId` and `quantity` is kept
/// verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderLine {
    #[serde(rename = "dishId", default, skip_serializing_if = "Option::is_none")]
    pub dish_id: Option<String>,
    pub quantity: u64,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: Map<String, Value>,
}

/// Customer order. `dishes` is never empty and every quantity is > 0.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Order {
    #[schema(example = "1")]
    pub id: String,
    #[serde(rename = "deliverTo")]
    #[schema(example = "308 Negra Arroyo Lane, Albuquerque, NM")]
    pub deliver_to: String,
    #[serde(rename = "mobileNumber")]
    #[schema(example = "(505) 143-3369")]
    pub mobile_number: String,
    #[serde(default)]
    pub status: OrderStatus,
    pub dishes: Vec<OrderLine>,
    /// Client fields with no dedicated member, stored and returned as sent
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: Map<String, Value>,
}

impl Record for Order {
    fn id(&self) -> &str {
        &self.id
    }
}
