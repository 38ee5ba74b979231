//! Error types for the Product actor.

use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    /// The requested product was not found.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// A product with this name already exists.
    #[error("Product already exists: {0}")]
    AlreadyExists(String),

    /// Prices must be finite and not negative.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
