//! Order API Handlers

use super::{ApiError, ApiResult, AppState};
use crate::model::{Order, OrderId};
use crate::order_actor::OrderError;
use crate::processor;
use crate::validation;
use actor_framework::ActorClient;
use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};
use serde_json::Value;
use tracing::info;

/// GET /api/orders - every order with its line items, by id
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Order>>> {
    Ok(Json(state.orders.list().await?))
}

/// GET /api/order/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Order>> {
    let id = order_id(path)?;
    Ok(Json(fetch(&state, id).await?))
}

/// POST /api/order - returns the stored, pending order
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Order>> {
    let Json(payload) = body?;
    let params = validation::validate_order_create(&payload, &state.products).await?;
    let id = state.orders.create_order(params).await?;
    info!(order_id = %id, "Order created");
    Ok(Json(fetch(&state, id).await?))
}

/// PUT /api/order/{id} - processes the order
pub async fn process(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Order>> {
    let id = order_id(path)?;
    let order = state
        .orders
        .process_order(id, processor::now_timestamp())
        .await?;
    Ok(Json(order))
}

/// POST /api/order/{id} - replaces the line items of a pending order
pub async fn replace_line_items(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<&'static str> {
    let id = order_id(path)?;
    let Json(payload) = body?;
    let products = validation::validate_line_items(&payload, &state.products).await?;
    let order = state
        .orders
        .replace_line_items(id, products)
        .await?;
    info!(order_id = %order.id, items = order.products.len(), "Order updated");
    Ok("Order updated")
}

/// DELETE /api/order/{id}
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<&'static str> {
    let id = order_id(path)?;
    state.orders.delete(id).await?;
    info!(order_id = %id, "Order deleted");
    Ok("Order deleted")
}

/// Reads the `{id}` segment. Digits too large for an id name no order and answer 404.
fn order_id(path: Result<Path<String>, PathRejection>) -> ApiResult<OrderId> {
    let Path(raw) = path?;
    match raw.parse::<u32>() {
        Ok(id) => Ok(OrderId(id)),
        Err(_) if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) => {
            Err(ApiError::NotFound(format!("order {raw} not found")))
        }
        Err(_) => Err(ApiError::MalformedPath(format!(
            "order id must be a non-negative integer, got `{raw}`"
        ))),
    }
}

async fn fetch(state: &AppState, id: OrderId) -> Result<Order, OrderError> {
    state
        .orders
        .get(id)
        .await?
        .ok_or_else(|| OrderError::NotFound(id.to_string()))
}
