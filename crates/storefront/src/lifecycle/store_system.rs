use crate::api::AppState;
use crate::clients::{OrderClient, ProductClient};
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Runtime orchestrator for the storefront actors.
///
/// `StoreSystem` starts the product and order actors, wires the product client into the
/// order actor, and stops both on shutdown.
///
/// # Example
///
/// ```ignore
/// let system = StoreSystem::new(32);
/// let app = api::router(system.state());
/// // ... serve ...
/// system.shutdown().await?;
/// ```
pub struct StoreSystem {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl StoreSystem {
    /// Creates both actors with mailboxes of `channel_capacity` and spawns them.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(channel_capacity: usize) -> Self {
        // 1. Create actors (no dependencies)
        let (product_actor, product_client) = crate::product_actor::new(channel_capacity);
        let (order_actor, order_client) = crate::order_actor::new(channel_capacity);
        let product_client = ProductClient::new(product_client);
        let order_client = OrderClient::new(order_client);

        // 2. Start actors with injected context
        let product_handle = tokio::spawn(product_actor.run(()));
        // Order actor withdraws stock through the product client
        let order_handle = tokio::spawn(order_actor.run(product_client.clone()));

        Self {
            product_client,
            order_client,
            handles: vec![product_handle, order_handle],
        }
    }

    /// Handler state sharing this system's clients.
    pub fn state(&self) -> AppState {
        AppState {
            products: self.product_client.clone(),
            orders: self.order_client.clone(),
        }
    }

    /// Gracefully shuts down the actors.
    ///
    /// Drops this system's clients and waits for both actor tasks. The actors only stop
    /// once every other clone (router state, the order actor's product client) is gone
    /// too: the order actor exits first and releases its product client, then the
    /// product actor follows.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");

        drop(self.order_client);
        drop(self.product_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
