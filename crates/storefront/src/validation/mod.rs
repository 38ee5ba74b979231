//! # Payload Validation
//!
//! Turns raw JSON request bodies into the typed DTOs the actors accept.
//!
//! Validation never writes. The only outside call it makes is the read-only existence
//! check behind [`ProductLookup`], which the caller injects; the HTTP layer passes a
//! [`ProductClient`](crate::clients::ProductClient), tests pass a fixed catalog.
//!
//! Rules run in a fixed order and stop at the first failure, so a payload with several
//! problems always reports the same one.

pub mod coerce;
pub mod error;
pub mod order;
pub mod product;

pub use error::ValidationError;
pub use order::{validate_line_items, validate_order_create};
pub use product::{validate_product_create, validate_product_update};

use crate::model::ProductName;
use crate::product_actor::ProductError;
use async_trait::async_trait;

/// Read-only product existence check used while validating orders.
#[async_trait]
pub trait ProductLookup: Send + Sync {
    async fn product_exists(&self, name: &ProductName) -> Result<bool, ProductError>;
}
