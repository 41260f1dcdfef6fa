//! Dish handlers (list, create, read, update)

use std::sync::Arc;

use axum::extract::{Path, State};

use crate::models::Dish;

use super::super::state::AppState;
use super::super::types::{
    ApiResult, DataBody, DataResponse, DishPayload, ErrorResponse, created, ok,
};

/// List dishes
///
/// GET /dishes
#[utoipa::path(
    get,
    path = "/dishes",
    responses(
        (status = 200, description = "Every dish in creation order", body = DataResponse<Vec<Dish>>)
    ),
    tag = "Dishes"
)]
pub async fn list_dishes(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Dish>> {
    ok(state.dishes.list())
}

/// Create dish
///
/// POST /dishes
#[utoipa::path(
    post,
    path = "/dishes",
    request_body(content = DishPayload, description = "`{ data: dish }`", content_type = "application/json"),
    responses(
        (status = 201, description = "Dish created", body = DataResponse<Dish>),
        (status = 400, description = "Every violated field rule, space-joined", body = ErrorResponse)
    ),
    tag = "Dishes"
)]
pub async fn create_dish(
    State(state): State<Arc<AppState>>,
    DataBody(payload): DataBody<DishPayload>,
) -> ApiResult<Dish> {
    created(state.dishes.create(payload)?)
}

/// Read dish
///
/// GET /dishes/{dish_id}
#[utoipa::path(
    get,
    path = "/dishes/{dish_id}",
    params(("dish_id" = String, Path, description = "Dish id")),
    responses(
        (status = 200, description = "The dish", body = DataResponse<Dish>),
        (status = 404, description = "Dish does not exist", body = ErrorResponse)
    ),
    tag = "Dishes"
)]
pub async fn read_dish(
    State(state): State<Arc<AppState>>,
    Path(dish_id): Path<String>,
) -> ApiResult<Dish> {
    ok(state.dishes.read(&dish_id)?)
}

/// Update dish
///
/// PUT /dishes/{dish_id}
#[utoipa::path(
    put,
    path = "/dishes/{dish_id}",
    params(("dish_id" = String, Path, description = "Dish id")),
    request_body(content = DishPayload, description = "`{ data: dish }`", content_type = "application/json"),
    responses(
        (status = 200, description = "Updated dish", body = DataResponse<Dish>),
        (status = 400, description = "Id mismatch or field violations", body = ErrorResponse),
        (status = 404, description = "Dish does not exist", body = ErrorResponse)
    ),
    tag = "Dishes"
)]
pub async fn update_dish(
    State(state): State<Arc<AppState>>,
    Path(dish_id): Path<String>,
    DataBody(payload): DataBody<DishPayload>,
) -> ApiResult<Dish> {
    ok(state.dishes.update(&dish_id, payload)?)
}
