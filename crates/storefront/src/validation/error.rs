use crate::model::ProductName;
use crate::product_actor::ProductError;
use thiserror::Error;

/// Why a request payload was rejected.
///
/// Field paths name the offending key the way it appears in the payload, for example
/// `price` or `products[1].quantity`.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("missing field `{0}`")]
    MissingField(String),

    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue { field: String, reason: &'static str },

    #[error("unexpected key `{0}`")]
    ExtraneousKey(String),

    #[error("product `{0}` does not exist")]
    UnknownProduct(ProductName),

    #[error("product `{0}` is listed more than once")]
    DuplicateProduct(ProductName),

    /// The existence check itself failed; not the caller's fault.
    #[error("product lookup failed: {0}")]
    Lookup(#[from] ProductError),
}

impl ValidationError {
    pub(crate) fn invalid(field: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidValue {
            field: field.into(),
            reason,
        }
    }
}
