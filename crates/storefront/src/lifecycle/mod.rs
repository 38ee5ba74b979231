//! # System Lifecycle
//!
//! Starts, wires and stops the actors behind the HTTP API.
//!
//! ## Wiring
//!
//! Actors are created first and receive their dependencies only when they start
//! (`run(context)`): the product actor runs with `()`, the order actor with a clone of the
//! [`ProductClient`](crate::clients::ProductClient).
//!
//! ```rust,ignore
//! let (product_actor, product_client) = product_actor::new(capacity);
//! let (order_actor, order_client) = order_actor::new(capacity);
//!
//! tokio::spawn(product_actor.run(()));
//! tokio::spawn(order_actor.run(ProductClient::new(product_client.clone())));
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - closes the sender side of each mailbox
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - join every actor task
//!
//! The dependency graph is acyclic (orders depend on products, never the reverse), so
//! channel closure alone is enough to stop everything.
//!
//! ## Observability
//!
//! [`setup_tracing`] installs the subscriber; see [`tracing`](self::tracing).

pub mod store_system;
pub mod tracing;

pub use store_system::*;
pub use self::tracing::*;
