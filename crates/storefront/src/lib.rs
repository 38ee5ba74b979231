//! # Storefront
//!
//! Inventory and order backend built on [`actor_framework`].
//!
//! - **[model]**: [`Product`](model::Product), [`Order`](model::Order) and their payloads.
//! - **[product_actor] / [order_actor]**: the resource actors that own the records.
//! - **[clients]**: typed wrappers around the actors' generic clients.
//! - **[processor]**: stock withdrawal with clamping and the pending to completed transition.
//! - **[validation]**: raw JSON payloads to typed DTOs.
//! - **[api]**: axum routes and error responses.
//! - **[lifecycle]**: starting and stopping the actors, tracing setup.
//! - **[config]**: environment configuration.

pub mod api;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
pub mod processor;
pub mod product_actor;
pub mod validation;
