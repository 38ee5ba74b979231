//! # Product Client
//!
//! Provides a high‑level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes domain‑specific methods.
//!
//! Besides its own API it is the stock source for order processing
//! ([`StockLedger`]) and the existence check used by order validation
//! ([`ProductLookup`]).
use crate::model::{Product, ProductCreate, ProductName, ProductUpdate};
use crate::order_actor::OrderError;
use crate::processor::{StockLedger, Withdrawal};
use crate::product_actor::{ProductAction, ProductActionResult, ProductError};
use crate::validation::ProductLookup;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    /// Creates a product and returns its key.
    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<ProductName, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Applies a partial update and returns the stored product.
    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        name: ProductName,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(name, update).await.map_err(Self::map_error)
    }

    /// Takes up to `requested` units out of stock, clamping at zero.
    #[instrument(skip(self))]
    pub async fn withdraw_stock(
        &self,
        name: ProductName,
        requested: u32,
    ) -> Result<Withdrawal, ProductError> {
        debug!("Withdrawing {} units of {}", requested, name);
        match self
            .inner
            .perform_action(name, ProductAction::WithdrawStock(requested))
            .await
            .map_err(Self::map_error)?
        {
            ProductActionResult::WithdrawStock(withdrawal) => Ok(withdrawal),
        }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.into_entity_error::<ProductError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(name)) => ProductError::NotFound(name),
            Err(FrameworkError::AlreadyExists(name)) => ProductError::AlreadyExists(name),
            Err(other) => ProductError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[async_trait]
impl StockLedger for ProductClient {
    async fn withdraw(
        &self,
        product: &ProductName,
        requested: u32,
    ) -> Result<Withdrawal, OrderError> {
        self.withdraw_stock(product.clone(), requested)
            .await
            .map_err(|e| match e {
                ProductError::NotFound(_) => OrderError::UnknownProduct(product.clone()),
                other => OrderError::ActorCommunicationError(other.to_string()),
            })
    }
}

#[async_trait]
impl ProductLookup for ProductClient {
    async fn product_exists(&self, name: &ProductName) -> Result<bool, ProductError> {
        Ok(self.get(name.clone()).await?.is_some())
    }
}
