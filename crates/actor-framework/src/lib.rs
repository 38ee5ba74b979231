//! # Actor Framework
//!
//! Building blocks for keeping typed records behind actors. Each record type gets one
//! [`ResourceActor`] that owns its in-memory store and answers a fixed set of requests
//! (create, get, list, update, delete, custom action) over a Tokio channel. Callers hold a
//! cheap, cloneable [`ResourceClient`]; nothing else can reach the store.
//!
//! ## Layers
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - the record, its DTOs, its lifecycle hooks.
//! 2. **Runtime Layer** ([`ResourceActor`]) - the message loop and the store.
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - typed requests and error mapping.
//!
//! ## Context Injection
//!
//! Dependencies are injected when the actor starts (`run(context)`), not when it is built.
//! An order actor that needs to touch product stock is started with the product client
//! as its context:
//!
//! ```rust,ignore
//! let (product_actor, product_client) = ResourceActor::<Product>::new(32);
//! let (order_actor, order_client) = ResourceActor::<Order>::new(32);
//!
//! tokio::spawn(product_actor.run(()));
//! tokio::spawn(order_actor.run(ProductClient::new(product_client.clone())));
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task.
//! - Messages are processed **sequentially** within an actor.
//! - Different actors run in parallel.
//!
//! ## Testing
//!
//! See [`mock`] for a scripted [`mock::MockClient`] and receiver-based helpers.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
