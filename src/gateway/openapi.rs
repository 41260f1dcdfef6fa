//! OpenAPI Documentation
//!
//! Generated from the handler annotations and served as JSON at
//! `/api-docs/openapi.json`.

use axum::Json;
use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{DishPayload, ErrorResponse, OrderPayload};
use crate::models::{Dish, Order, OrderLine, OrderStatus};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "GrubDash API",
        version = "1.0.0",
        description = "Dishes and delivery orders for a single restaurant.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:5000", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        crate::gateway::handlers::list_dishes,
        crate::gateway::handlers::create_dish,
        crate::gateway::handlers::read_dish,
        crate::gateway::handlers::update_dish,
        crate::gateway::handlers::list_orders,
        crate::gateway::handlers::create_order,
        crate::gateway::handlers::read_order,
        crate::gateway::handlers::update_order,
        crate::gateway::handlers::delete_order,
    ),
    components(
        schemas(
            Dish,
            DishPayload,
            Order,
            OrderLine,
            OrderStatus,
            OrderPayload,
            ErrorResponse,
            HealthResponse,
        )
    ),
    tags(
        (name = "System", description = "Health"),
        (name = "Dishes", description = "Menu items"),
        (name = "Orders", description = "Delivery orders and their status"),
    )
)]
pub struct ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
