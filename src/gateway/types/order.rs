//! Order request body

use serde::Deserialize;
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// Order fields as sent by the client (`data` member of the body).
///
/// Fields stay raw JSON so that a missing list, a non-list, a bad quantity
/// or a non-string address can each be reported with their own message.
/// Members without a dedicated field land in `extra` and are stored with
/// the order.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct OrderPayload {
    /// Only meaningful on update, where it must match the route id
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub id: Option<Value>,
    #[serde(rename = "deliverTo", default)]
    #[schema(value_type = Option<String>)]
    pub deliver_to: Option<Value>,
    #[serde(rename = "mobileNumber", default)]
    #[schema(value_type = Option<String>)]
    pub mobile_number: Option<Value>,
    /// pending | preparing | out-for-delivery | delivered
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "pending")]
    pub status: Option<Value>,
    /// `[{ "dishId": "1", "quantity": 2 }, ...]`
    #[serde(default)]
    #[schema(value_type = Option<Vec<crate::models::OrderLine>>)]
    pub dishes: Option<Value>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: Map<String, Value>,
}
