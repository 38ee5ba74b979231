//! # Order Actor
//!
//! Owns customer orders and drives order processing.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`]
//! - [`actions`] - [`OrderAction`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Dependency Injection
//!
//! The Order actor takes a [`ProductClient`](crate::clients::ProductClient) as its context.
//! Processing an order withdraws stock through it, one line item at a time, while the
//! order itself stays locked inside this actor. The product actor never calls back, so the
//! two actors cannot wait on each other.
//!
//! ```rust,ignore
//! let (product_actor, product_client) = product_actor::new(32);
//! let (order_actor, order_client) = order_actor::new(32);
//!
//! tokio::spawn(product_actor.run(()));
//! tokio::spawn(order_actor.run(ProductClient::new(product_client)));
//! ```
//!
//! ## Keys
//!
//! Orders are numbered from 1 in creation order. Numbers of deleted orders are not reused.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::Order;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size)
}
