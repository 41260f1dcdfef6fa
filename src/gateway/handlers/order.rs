//! Order handlers (list, create, read, update, delete)

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::models::Order;

use super::super::state::AppState;
use super::super::types::{
    ApiError, ApiResult, DataBody, DataResponse, ErrorResponse, OrderPayload, created, ok,
};

/// List orders
///
/// GET /orders
#[utoipa::path(
    get,
    path = "/orders",
    responses(
        (status = 200, description = "Every order in creation order", body = DataResponse<Vec<Order>>)
    ),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Order>> {
    ok(state.orders.list())
}

/// Create order
///
/// POST /orders
#[utoipa::path(
    post,
    path = "/orders",
    request_body(content = OrderPayload, description = "`{ data: order }`", content_type = "application/json"),
    responses(
        (status = 201, description = "Order created", body = DataResponse<Order>),
        (status = 400, description = "Every violated field rule, space-joined", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    DataBody(payload): DataBody<OrderPayload>,
) -> ApiResult<Order> {
    created(state.orders.create(payload)?)
}

/// Read order
///
/// GET /orders/{order_id}
#[utoipa::path(
    get,
    path = "/orders/{order_id}",
    params(("order_id" = String, Path, description = "Order id")),
    responses(
        (status = 200, description = "The order", body = DataResponse<Order>),
        (status = 404, description = "Order not found", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn read_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> ApiResult<Order> {
    ok(state.orders.read(&order_id)?)
}

/// Update order
///
/// PUT /orders/{order_id}
#[utoipa::path(
    put,
    path = "/orders/{order_id}",
    params(("order_id" = String, Path, description = "Order id")),
    request_body(content = OrderPayload, description = "`{ data: order }` with a required status", content_type = "application/json"),
    responses(
        (status = 200, description = "Updated order", body = DataResponse<Order>),
        (status = 400, description = "Id mismatch, invalid status, delivered order or field violations", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn update_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
    DataBody(payload): DataBody<OrderPayload>,
) -> ApiResult<Order> {
    ok(state.orders.update(&order_id, payload)?)
}

/// Delete order
///
/// DELETE /orders/{order_id}
#[utoipa::path(
    delete,
    path = "/orders/{order_id}",
    params(("order_id" = String, Path, description = "Order id")),
    responses(
        (status = 204, description = "Order deleted"),
        (status = 400, description = "Order is not pending", body = ErrorResponse),
        (status = 404, description = "Order not found", body = ErrorResponse)
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(state): State<Arc<AppState>>,
    Path(order_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.orders.delete(&order_id)?;
    Ok(StatusCode::NO_CONTENT)
}
