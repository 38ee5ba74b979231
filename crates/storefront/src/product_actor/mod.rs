//! # Product Actor
//!
//! Owns the product catalog. Every product lives inside one [`ResourceActor`], so
//! stock changes to the same product never interleave.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`]
//! - [`actions`] - [`ProductAction`] and [`ProductActionResult`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Keys
//!
//! Products are keyed by their folded [`ProductName`](crate::model::ProductName). Creating a
//! product under a name that is already taken fails with [`ProductError::AlreadyExists`].
//!
//! ## Usage
//!
//! ```rust
//! use storefront::product_actor;
//! use storefront::clients::ProductClient;
//! use storefront::model::{ProductCreate, ProductName};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = product_actor::new(32);
//!     let client = ProductClient::new(generic_client);
//!     tokio::spawn(actor.run(()));
//!
//!     let name = client
//!         .create_product(ProductCreate {
//!             name: ProductName::new("Bolt"),
//!             price: 0.25,
//!             quantity: 3,
//!         })
//!         .await?;
//!
//!     // Asking for more than the shelf holds takes what is there
//!     let withdrawal = client.withdraw_stock(name, 5).await?;
//!     assert_eq!(withdrawal.fulfilled, 3);
//!     assert_eq!(withdrawal.remaining, 0);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Product;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ResourceClient<Product>) {
    ResourceActor::new(buffer_size)
}
