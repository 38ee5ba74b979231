//! Error responses.
//!
//! Every failure leaves the API as a status code plus `{"error": "<message>"}`.
//! Internal failures are logged in full and answered with a fixed message.

use crate::order_actor::OrderError;
use crate::product_actor::ProductError;
use crate::validation::ValidationError;
use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Payload failed validation (400).
    #[error("{0}")]
    Validation(ValidationError),

    /// Body was not JSON at all (400).
    #[error("malformed request body: {0}")]
    MalformedBody(String),

    /// A path segment could not be read (400).
    #[error("malformed request path: {0}")]
    MalformedPath(String),

    #[error("{0}")]
    NotFound(String),

    /// Request clashes with current state (409).
    #[error("{0}")]
    Conflict(String),

    /// Actor plumbing failed (500). The text is logged, never sent.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedBody(_) | ApiError::MalformedPath(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "Request failed");
                "internal server error".to_string()
            }
            other => {
                tracing::warn!(status = status.as_u16(), error = %other, "Request rejected");
                other.to_string()
            }
        };
        let body = serde_json::json!({ "error": message });
        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Lookup(inner) => ApiError::from(inner),
            other => ApiError::Validation(other),
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(name) => ApiError::NotFound(format!("product `{name}` not found")),
            ProductError::AlreadyExists(name) => {
                ApiError::Conflict(format!("product `{name}` already exists"))
            }
            ProductError::InvalidPrice(price) => {
                let reason = if price.is_finite() {
                    "must not be negative"
                } else {
                    "must be finite"
                };
                ApiError::Validation(ValidationError::invalid("price", reason))
            }
            ProductError::ActorCommunicationError(detail) => ApiError::Internal(detail),
        }
    }
}

impl From<OrderError> for ApiError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::NotFound(id) => ApiError::NotFound(format!("order {id} not found")),
            OrderError::ActorCommunicationError(detail) => ApiError::Internal(detail),
            // already processed, or a product vanished since the order was placed
            conflict => ApiError::Conflict(conflict.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedBody(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::MalformedPath(rejection.body_text())
    }
}
