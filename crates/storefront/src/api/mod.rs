//! # HTTP API
//!
//! Axum routes over the product and order clients.
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/` | [`home::listing`] |
//! | GET | `/api/products` | [`products::list`] |
//! | POST | `/api/product` | [`products::create`] |
//! | GET, PUT, DELETE | `/api/product/{name}` | [`products`] |
//! | GET | `/api/orders` | [`orders::list`] |
//! | POST | `/api/order` | [`orders::create`] |
//! | GET, PUT, POST, DELETE | `/api/order/{id}` | [`orders`] |
//!
//! `PUT /api/order/{id}` processes the order; `POST /api/order/{id}` replaces its line items.

pub mod error;
pub mod home;
pub mod orders;
pub mod products;

pub use error::{ApiError, ApiResult};

use crate::clients::{OrderClient, ProductClient};
use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

/// Shared handler state: one client per actor.
#[derive(Clone)]
pub struct AppState {
    pub products: ProductClient,
    pub orders: OrderClient,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::listing))
        .merge(product_routes())
        .merge(order_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(products::list))
        .route("/api/product", post(products::create))
        .route(
            "/api/product/{name}",
            get(products::get_by_name)
                .put(products::update)
                .delete(products::delete),
        )
}

fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/api/orders", get(orders::list))
        .route("/api/order", post(orders::create))
        .route(
            "/api/order/{id}",
            get(orders::get_by_id)
                .put(orders::process)
                .post(orders::replace_line_items)
                .delete(orders::delete),
        )
}
