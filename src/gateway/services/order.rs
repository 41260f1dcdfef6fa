//! Order Service - validation, CRUD and status rules over the order store
//!
//! Status moves freely between the four values until an order is
//! `delivered`; after that every update is refused. Only `pending`
//! orders can be deleted.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::gateway::types::OrderPayload;
use crate::models::{Order, OrderLine, OrderStatus};
use crate::store::Store;

use super::validation::{Violations, mismatched_id, positive_integer, text};

/// Order service error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// One or more field rules failed; message lists all of them
    #[error("{0}")]
    Validation(String),

    #[error("Order not found for id: {0}")]
    NotFound(String),

    #[error("Order id does not match route id. Order: {body_id}, Route: {route_id}.")]
    IdMismatch { body_id: String, route_id: String },

    #[error("Order must have a status of {}", OrderStatus::valid_list())]
    InvalidStatus,

    #[error("A delivered order cannot be changed")]
    Delivered,

    #[error("An order cannot be deleted unless it is pending")]
    NotPending,

    /// Stored record's id differs from the id it was looked up by
    #[error("OrderId {route_id} from urlParam not matching with the id in the object {record_id}")]
    RecordMismatch { route_id: String, record_id: String },
}

impl OrderError {
    pub fn code(&self) -> &'static str {
        match self {
            OrderError::Validation(_) => "VALIDATION_FAILED",
            OrderError::NotFound(_) => "ORDER_NOT_FOUND",
            OrderError::IdMismatch { .. } => "ID_MISMATCH",
            OrderError::InvalidStatus => "INVALID_STATUS",
            OrderError::Delivered => "ORDER_DELIVERED",
            OrderError::NotPending => "ORDER_NOT_PENDING",
            OrderError::RecordMismatch { .. } => "RECORD_MISMATCH",
        }
    }

    pub fn http_status(&self) -> u16 {
        match self {
            OrderError::NotFound(_) | OrderError::RecordMismatch { .. } => 404,
            OrderError::Validation(_)
            | OrderError::IdMismatch { .. }
            | OrderError::InvalidStatus
            | OrderError::Delivered
            | OrderError::NotPending => 400,
        }
    }
}

/// Validated order fields, everything but the id
#[derive(Debug, Clone, PartialEq, Eq)]
struct OrderFields {
    deliver_to: String,
    mobile_number: String,
    /// `None` when the payload carried no status
    status: Option<OrderStatus>,
    dishes: Vec<OrderLine>,
    extra: Map<String, Value>,
}

fn dish_id_of(line: &Value) -> Option<String> {
    match line.get("dishId") {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

/// Everything on a line besides `dishId` and `quantity`
fn line_extra(line: &Value) -> Map<String, Value> {
    match line {
        Value::Object(fields) => fields
            .iter()
            .filter(|(key, _)| !matches!(key.as_str(), "dishId" | "quantity"))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
        _ => Map::new(),
    }
}

/// Check the `dishes` list: missing, empty or not a list, and every quantity.
fn validate_dishes(dishes: Option<&Value>, violations: &mut Violations) -> Vec<OrderLine> {
    let lines = match dishes {
        None | Some(Value::Null) => {
            violations.push("Order must include a dish");
            return Vec::new();
        }
        Some(Value::Array(lines)) if !lines.is_empty() => lines,
        Some(_) => {
            violations.push("Order must include at least one dish");
            return Vec::new();
        }
    };

    lines
        .iter()
        .enumerate()
        .filter_map(|(index, line)| {
            let quantity = positive_integer(line.get("quantity"));
            if quantity.is_none() {
                violations.push(format!(
                    "dish {} must have a quantity that is an integer greater than 0",
                    index
                ));
            }
            Some(OrderLine {
                dish_id: dish_id_of(line),
                quantity: quantity?,
                extra: line_extra(line),
            })
        })
        .collect()
}

/// Status named by the payload.
///
/// `None` when absent, null or empty; `Some(None)` when present but not one
/// of the four values (including non-string values).
fn requested_status(value: Option<&Value>) -> Option<Option<OrderStatus>> {
    match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) if s.is_empty() => None,
        Some(Value::String(s)) => Some(OrderStatus::parse(s)),
        Some(_) => Some(None),
    }
}

/// Check deliverTo, mobileNumber and dishes, collecting all violations.
///
/// A present status must be one of the four values; an absent or empty one
/// is left for the caller to default.
fn validate(payload: &OrderPayload) -> Result<OrderFields, OrderError> {
    let deliver_to = text(payload.deliver_to.as_ref());
    let mobile_number = text(payload.mobile_number.as_ref());

    let mut violations = Violations::new();
    violations.check(deliver_to.is_none(), "Order must include a deliverTo");
    violations.check(mobile_number.is_none(), "Order must include a mobileNumber");
    let dishes = validate_dishes(payload.dishes.as_ref(), &mut violations);

    let status = requested_status(payload.status.as_ref());
    if let Some(None) = status {
        violations.push(OrderError::InvalidStatus.to_string());
    }

    violations.into_result().map_err(OrderError::Validation)?;

    Ok(OrderFields {
        deliver_to: deliver_to.unwrap_or_default().to_string(),
        mobile_number: mobile_number.unwrap_or_default().to_string(),
        status: status.flatten(),
        dishes,
        extra: payload.extra.clone(),
    })
}

/// Status required on update: present, non-empty and one of the four values
fn required_status(payload: &OrderPayload) -> Result<OrderStatus, OrderError> {
    requested_status(payload.status.as_ref())
        .flatten()
        .ok_or(OrderError::InvalidStatus)
}

/// Order Service - owns the order store
#[derive(Default)]
pub struct OrderService {
    store: Store<Order>,
}

impl OrderService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: Store<Order>) -> Self {
        Self { store }
    }

    /// Every order in creation order
    pub fn list(&self) -> Vec<Order> {
        self.store.list()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Create an order with a freshly allocated id, `pending` unless the
    /// payload names a status.
    pub fn create(&self, payload: OrderPayload) -> Result<Order, OrderError> {
        let fields = validate(&payload).inspect_err(|e| {
            tracing::warn!("[ORDER] Create rejected: {}", e);
        })?;

        let order = self.store.insert_with(|id| Order {
            id,
            deliver_to: fields.deliver_to,
            mobile_number: fields.mobile_number,
            status: fields.status.unwrap_or_default(),
            dishes: fields.dishes,
            extra: fields.extra,
        });
        tracing::info!(
            "[ORDER] Created order {} ({} lines, {})",
            order.id,
            order.dishes.len(),
            order.status
        );
        Ok(order)
    }

    pub fn read(&self, order_id: &str) -> Result<Order, OrderError> {
        tracing::debug!("[ORDER] Read order {}", order_id);
        self.store
            .get(order_id)
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))
    }

    /// Update an existing order.
    ///
    /// Checks run in order: existence, body id vs route id, status value,
    /// terminal state, field rules. Nothing is written unless all pass.
    pub fn update(&self, order_id: &str, payload: OrderPayload) -> Result<Order, OrderError> {
        let result = self
            .store
            .update(order_id, |order| {
                if let Some(body_id) = mismatched_id(payload.id.as_ref(), order_id) {
                    return Err(OrderError::IdMismatch {
                        body_id,
                        route_id: order_id.to_string(),
                    });
                }
                let status = required_status(&payload)?;
                if order.status.is_terminal() {
                    return Err(OrderError::Delivered);
                }
                let fields = validate(&payload)?;

                // Empty fields fall back to the stored values
                if !fields.deliver_to.is_empty() {
                    order.deliver_to = fields.deliver_to;
                }
                if !fields.mobile_number.is_empty() {
                    order.mobile_number = fields.mobile_number;
                }
                if !fields.dishes.is_empty() {
                    order.dishes = fields.dishes;
                }
                order.status = status;
                order.extra.extend(fields.extra);
                Ok(())
            })
            .unwrap_or_else(|| Err(OrderError::NotFound(order_id.to_string())));

        match &result {
            Ok(order) => tracing::info!("[ORDER] Updated order {} -> {}", order.id, order.status),
            Err(e) => tracing::warn!("[ORDER] Update of {} rejected: {}", order_id, e),
        }
        result
    }

    /// Delete a `pending` order.
    pub fn delete(&self, order_id: &str) -> Result<(), OrderError> {
        let result = self
            .store
            .remove_if(order_id, |order| {
                if order.id != order_id {
                    return Err(OrderError::RecordMismatch {
                        route_id: order_id.to_string(),
                        record_id: order.id.clone(),
                    });
                }
                if order.status != OrderStatus::Pending {
                    return Err(OrderError::NotPending);
                }
                Ok(())
            })
            .unwrap_or_else(|| Err(OrderError::NotFound(order_id.to_string())));

        match result {
            Ok(order) => {
                tracing::info!("[ORDER] Deleted order {}", order.id);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("[ORDER] Delete of {} rejected: {}", order_id, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> OrderPayload {
        serde_json::from_value(value).unwrap()
    }

    fn valid() -> OrderPayload {
        payload(json!({
            "deliverTo": "1600 Pennsylvania Avenue NW, Washington, DC 20500",
            "mobileNumber": "(202) 456-1111",
            "dishes": [{ "dishId": "1", "quantity": 2 }]
        }))
    }

    fn with_status(status: &str) -> OrderPayload {
        let mut p = valid();
        p.status = Some(json!(status));
        p
    }

    #[test]
    fn test_create_defaults_to_pending() {
        let service = OrderService::new();
        let order = service.create(valid()).unwrap();

        assert_eq!(order.id, "1");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(
            order.dishes,
            vec![OrderLine {
                dish_id: Some("1".to_string()),
                quantity: 2,
                extra: Map::new(),
            }]
        );
        assert_eq!(service.read("1").unwrap(), order);
    }

    #[test]
    fn test_create_keeps_explicit_status() {
        let service = OrderService::new();
        let order = service.create(with_status("preparing")).unwrap();
        assert_eq!(order.status, OrderStatus::Preparing);
    }

    #[test]
    fn test_create_rejects_unknown_status() {
        let service = OrderService::new();
        let err = service.create(with_status("lost")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Order must have a status of pending,preparing,out-for-delivery,delivered"
        );
        assert!(service.is_empty());
    }

    #[test]
    fn test_create_empty_dishes() {
        let service = OrderService::new();
        let mut p = valid();
        p.dishes = Some(json!([]));
        let err = service.create(p).unwrap_err();
        assert_eq!(err.http_status(), 400);
        assert_eq!(err.to_string(), "Order must include at least one dish");
    }

    #[test]
    fn test_create_dishes_not_a_list() {
        let service = OrderService::new();
        let mut p = valid();
        p.dishes = Some(json!("two tacos"));
        assert_eq!(
            service.create(p).unwrap_err().to_string(),
            "Order must include at least one dish"
        );
    }

    #[test]
    fn test_create_missing_everything() {
        let service = OrderService::new();
        let err = service.create(OrderPayload::default()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Order must include a deliverTo Order must include a mobileNumber Order must include a dish"
        );
    }

    #[test]
    fn test_create_reports_each_bad_quantity_by_index() {
        let service = OrderService::new();
        let mut p = valid();
        p.dishes = Some(json!([
            { "dishId": "1", "quantity": 0 },
            { "dishId": "2", "quantity": 3 },
            { "dishId": "3", "quantity": "2" },
            { "dishId": "4" }
        ]));
        let err = service.create(p).unwrap_err();
        assert_eq!(
            err.to_string(),
            "dish 0 must have a quantity that is an integer greater than 0 \
             dish 2 must have a quantity that is an integer greater than 0 \
             dish 3 must have a quantity that is an integer greater than 0"
        );
        assert!(service.is_empty());
    }

    #[test]
    fn test_create_keeps_client_fields() {
        let service = OrderService::new();
        let p = payload(json!({
            "deliverTo": "742 Evergreen Terrace",
            "mobileNumber": "(939) 555-0113",
            "notes": "ring twice",
            "dishes": [{
                "id": "d1",
                "name": "Century eggs",
                "description": "Whole eggs preserved in clay",
                "image_url": "https://images.example.com/eggs.jpg",
                "price": 17,
                "quantity": 1
            }]
        }));
        let order = service.create(p).unwrap();
        let stored = serde_json::to_value(service.read(&order.id).unwrap()).unwrap();

        assert_eq!(stored["notes"], "ring twice");
        assert_eq!(
            stored["dishes"],
            json!([{
                "id": "d1",
                "name": "Century eggs",
                "description": "Whole eggs preserved in clay",
                "image_url": "https://images.example.com/eggs.jpg",
                "price": 17,
                "quantity": 1
            }])
        );
    }

    #[test]
    fn test_non_string_fields_reported_with_other_violations() {
        let service = OrderService::new();
        let mut p = valid();
        p.deliver_to = Some(json!(42));
        p.status = Some(json!(3));
        p.dishes = Some(json!([{ "dishId": "1", "quantity": -1 }]));
        assert_eq!(
            service.create(p).unwrap_err().to_string(),
            "Order must include a deliverTo \
             dish 0 must have a quantity that is an integer greater than 0 \
             Order must have a status of pending,preparing,out-for-delivery,delivered"
        );
    }

    #[test]
    fn test_list_is_stable_without_mutation() {
        let service = OrderService::new();
        service.create(valid()).unwrap();
        service.create(with_status("preparing")).unwrap();
        assert_eq!(service.list(), service.list());
        assert_eq!(service.len(), 2);
    }

    #[test]
    fn test_update_changes_status_and_fields() {
        let service = OrderService::new();
        let order = service.create(valid()).unwrap();

        let mut p = with_status("out-for-delivery");
        p.id = Some(json!(order.id));
        p.deliver_to = Some(json!("221B Baker Street"));
        let updated = service.update(&order.id, p).unwrap();

        assert_eq!(updated.id, order.id);
        assert_eq!(updated.status, OrderStatus::OutForDelivery);
        assert_eq!(updated.deliver_to, "221B Baker Street");
        assert_eq!(updated.mobile_number, order.mobile_number);
        assert_eq!(service.read(&order.id).unwrap(), updated);
    }

    #[test]
    fn test_update_can_move_backwards_before_delivery() {
        let service = OrderService::new();
        let order = service.create(with_status("out-for-delivery")).unwrap();
        let updated = service.update(&order.id, with_status("pending")).unwrap();
        assert_eq!(updated.status, OrderStatus::Pending);
    }

    #[test]
    fn test_update_missing_order() {
        let service = OrderService::new();
        let err = service.update("7", with_status("pending")).unwrap_err();
        assert_eq!(err.http_status(), 404);
        assert_eq!(err.to_string(), "Order not found for id: 7");
    }

    #[test]
    fn test_update_id_mismatch() {
        let service = OrderService::new();
        let order = service.create(valid()).unwrap();
        let mut p = with_status("pending");
        p.id = Some(json!("99"));
        assert_eq!(
            service.update(&order.id, p).unwrap_err().to_string(),
            "Order id does not match route id. Order: 99, Route: 1."
        );
    }

    #[test]
    fn test_update_numeric_body_id_mismatch() {
        let service = OrderService::new();
        let order = service.create(valid()).unwrap();
        let mut p = with_status("pending");
        p.id = Some(json!(6));
        assert_eq!(
            service.update(&order.id, p).unwrap_err().to_string(),
            "Order id does not match route id. Order: 6, Route: 1."
        );
    }

    #[test]
    fn test_update_rejects_non_string_status() {
        let service = OrderService::new();
        let order = service.create(valid()).unwrap();
        let mut p = valid();
        p.status = Some(json!(true));
        assert_eq!(
            service.update(&order.id, p).unwrap_err(),
            OrderError::InvalidStatus
        );
    }

    #[test]
    fn test_update_requires_valid_status() {
        let service = OrderService::new();
        let order = service.create(valid()).unwrap();
        for status in [None, Some(""), Some("invalid")] {
            let mut p = valid();
            p.status = status.map(|s| json!(s));
            assert_eq!(
                service.update(&order.id, p).unwrap_err(),
                OrderError::InvalidStatus
            );
        }
    }

    #[test]
    fn test_delivered_order_cannot_change() {
        let service = OrderService::new();
        let order = service.create(with_status("delivered")).unwrap();

        for target in ["pending", "preparing", "out-for-delivery", "delivered"] {
            let err = service.update(&order.id, with_status(target)).unwrap_err();
            assert_eq!(err.http_status(), 400);
            assert_eq!(err.to_string(), "A delivered order cannot be changed");
        }
        assert_eq!(service.read(&order.id).unwrap(), order);
    }

    #[test]
    fn test_update_validation_failure_leaves_order() {
        let service = OrderService::new();
        let order = service.create(valid()).unwrap();
        let mut p = with_status("preparing");
        p.dishes = Some(json!([{ "dishId": "1", "quantity": -1 }]));

        let err = service.update(&order.id, p).unwrap_err();
        assert!(matches!(err, OrderError::Validation(_)));
        assert_eq!(service.read(&order.id).unwrap(), order);
    }

    #[test]
    fn test_delete_pending_order() {
        let service = OrderService::new();
        let keep = service.create(valid()).unwrap();
        let order = service.create(valid()).unwrap();

        service.delete(&order.id).unwrap();
        assert_eq!(service.list(), vec![keep]);
        assert_eq!(
            service.read(&order.id).unwrap_err(),
            OrderError::NotFound(order.id.clone())
        );
    }

    #[test]
    fn test_delete_requires_pending() {
        let service = OrderService::new();
        let order = service.create(with_status("preparing")).unwrap();

        let err = service.delete(&order.id).unwrap_err();
        assert_eq!(err.http_status(), 400);
        assert_eq!(
            err.to_string(),
            "An order cannot be deleted unless it is pending"
        );
        assert_eq!(service.len(), 1);
    }

    #[test]
    fn test_delete_missing_order() {
        let service = OrderService::new();
        assert_eq!(
            service.delete("3").unwrap_err(),
            OrderError::NotFound("3".to_string())
        );
    }

    #[test]
    fn test_id_allocation_follows_current_max() {
        let service = OrderService::new();
        service.create(valid()).unwrap();
        let second = service.create(valid()).unwrap();
        service.delete(&second.id).unwrap();
        // max id is back to 1
        assert_eq!(service.create(valid()).unwrap().id, "2");
    }
}
