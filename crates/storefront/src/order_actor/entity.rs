//! Entity trait implementation for the Order domain type.
//!
//! See the trait implementation on [`Order`] for method documentation.

use super::actions::OrderAction;
use super::error::OrderError;
use crate::clients::ProductClient;
use crate::model::{Order, OrderCreate, OrderId, OrderUpdate};
use crate::processor;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Action = OrderAction;
    type ActionResult = Order;
    type Context = ProductClient;
    type Error = OrderError;

    /// Orders take the actor's sequence number.
    fn assign_id(seq: u32, _params: &OrderCreate) -> OrderId {
        OrderId(seq)
    }

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Self::new(id, params))
    }

    /// Replaces the line items of a pending order.
    async fn on_update(
        &mut self,
        update: OrderUpdate,
        _ctx: &ProductClient,
    ) -> Result<(), OrderError> {
        if self.completed {
            return Err(OrderError::AlreadyProcessed(self.id));
        }
        self.products = update.products;
        Ok(())
    }

    /// Handles custom actions for the Order entity.
    ///
    /// # Actions
    /// - `Process`: withdraws stock for each line item and completes the order. Returns the
    ///   completed order.
    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &ProductClient,
    ) -> Result<Order, OrderError> {
        match action {
            OrderAction::Process { processed_at } => {
                processor::process(self, ctx, processed_at).await?;
                info!(order_id = %self.id, items = self.products.len(), "Order processed");
                Ok(self.clone())
            }
        }
    }
}
