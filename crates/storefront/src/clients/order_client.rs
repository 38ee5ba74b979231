//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//! It wraps a `ResourceClient<Order>`; stock handling happens inside the Order actor
//! while it processes an order.
use crate::model::{LineItem, Order, OrderCreate, OrderId, OrderUpdate};
use crate::order_actor::{OrderAction, OrderError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    /// Stores a new pending order and returns its number.
    #[instrument(skip(self, params), fields(items = params.products.len()))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?params, "create_order called");
        info!("Sending create_order to actor");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Swaps the whole line item collection of a pending order.
    #[instrument(skip(self, products), fields(items = products.len()))]
    pub async fn replace_line_items(
        &self,
        id: OrderId,
        products: Vec<LineItem>,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.inner
            .update(id, OrderUpdate { products })
            .await
            .map_err(Self::map_error)
    }

    /// Processes a pending order and returns it completed.
    #[instrument(skip(self))]
    pub async fn process_order(
        &self,
        id: OrderId,
        processed_at: String,
    ) -> Result<Order, OrderError> {
        info!("Sending process to actor");
        self.inner
            .perform_action(id, OrderAction::Process { processed_at })
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
