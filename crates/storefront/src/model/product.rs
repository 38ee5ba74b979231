use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// Case-insensitive product key.
///
/// Every way of building one lowercases the input, so two names that differ only in case
/// are the same key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ProductName(String);

impl ProductName {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductName {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ProductName {
    fn from(raw: String) -> Self {
        Self::new(&raw)
    }
}

impl From<ProductName> for String {
    fn from(name: ProductName) -> Self {
        name.0
    }
}

impl Display for ProductName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents a product in the inventory.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Product`](#impl-ActorEntity-for-Product) for details on:
/// - Creation parameters ([`ProductCreate`](crate::model::ProductCreate))
/// - Update parameters ([`ProductUpdate`](crate::model::ProductUpdate))
/// - Custom actions ([`ProductAction`](crate::product_actor::ProductAction))
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub name: ProductName,
    pub price: f64,
    pub quantity: u32,
}

impl Product {
    /// Creates a new Product instance.
    ///
    /// # Arguments
    /// * `name` - Product key, already folded
    /// * `price` - Unit price, non-negative
    /// * `quantity` - Available stock
    pub fn new(name: ProductName, price: f64, quantity: u32) -> Self {
        Self {
            name,
            price,
            quantity,
        }
    }
}

/// Payload for creating a product.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCreate {
    pub name: ProductName,
    pub price: f64,
    pub quantity: u32,
}

/// Payload for updating a product. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub price: Option<f64>,
    pub quantity: Option<u32>,
}
