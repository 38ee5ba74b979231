use crate::model::ProductName;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One product requested by an order, with its quantity.
///
/// The (order, product) pair is unique: an order never lists the same product twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineItem {
    pub product_name: ProductName,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(product_name: impl Into<ProductName>, quantity: u32) -> Self {
        Self {
            product_name: product_name.into(),
            quantity,
        }
    }
}

/// Represents a customer order.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`])
/// - Line item replacement ([`OrderUpdate`])
/// - Processing ([`OrderAction`](crate::order_actor::OrderAction))
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: OrderId,
    #[serde(rename = "name")]
    pub customer_name: String,
    #[serde(rename = "address")]
    pub customer_address: String,
    pub completed: bool,
    pub date_created: String,
    pub date_processed: Option<String>,
    pub products: Vec<LineItem>,
}

impl Order {
    /// Creates a pending order.
    ///
    /// Orders always start with `completed == false` and no processing date; only
    /// processing moves them forward.
    pub fn new(id: OrderId, params: OrderCreate) -> Self {
        Self {
            id,
            customer_name: params.customer_name,
            customer_address: params.customer_address,
            completed: false,
            date_created: params.date_created,
            date_processed: None,
            products: params.products,
        }
    }
}

/// Payload for creating a new order.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderCreate {
    pub customer_name: String,
    pub customer_address: String,
    pub date_created: String,
    pub products: Vec<LineItem>,
}

/// Replaces an order's whole line item collection.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderUpdate {
    pub products: Vec<LineItem>,
}
