//! Product API Handlers

use super::{ApiResult, AppState};
use crate::model::{Product, ProductName};
use crate::product_actor::ProductError;
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

/// GET /api/products - every product, by name
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Product>>> {
    Ok(Json(state.products.list().await?))
}

/// GET /api/product/{name}
pub async fn get_by_name(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Product>> {
    let Path(name) = path?;
    let name = ProductName::from(name);
    let product = state
        .products
        .get(name.clone())
        .await?
        .ok_or_else(|| ProductError::NotFound(name.to_string()))?;
    Ok(Json(product))
}

/// POST /api/product
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<&'static str> {
    let Json(payload) = body?;
    let params = validation::validate_product_create(&payload)?;
    let name = state.products.create_product(params).await?;
    info!(%name, "Product added");
    Ok("Product added")
}

/// PUT /api/product/{name} - partial update of price and/or quantity
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> ApiResult<&'static str> {
    let Path(name) = path?;
    let Json(payload) = body?;
    let update = validation::validate_product_update(&payload)?;
    let product = state
        .products
        .update_product(ProductName::from(name), update)
        .await?;
    info!(name = %product.name, price = product.price, quantity = product.quantity, "Product updated");
    Ok("Product updated")
}

/// DELETE /api/product/{name}
///
/// Orders that list the product keep their line items.
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> ApiResult<&'static str> {
    let Path(name) = path?;
    let name = ProductName::from(name);
    state.products.delete(name.clone()).await?;
    info!(%name, "Product deleted");
    Ok("Product deleted")
}
