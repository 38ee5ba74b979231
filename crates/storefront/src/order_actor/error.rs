//! Error types for the Order actor.

use crate::model::{OrderId, ProductName};
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// Completed orders can be neither processed again nor edited.
    #[error("Order {0} has already been processed")]
    AlreadyProcessed(OrderId),

    /// A line item names a product that no longer exists.
    #[error("Order references unknown product: {0}")]
    UnknownProduct(ProductName),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
