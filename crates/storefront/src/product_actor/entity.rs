//! Entity trait implementation for the Product domain type.
//!
//! See the trait implementation on [`Product`] for method documentation.

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductName, ProductUpdate};
use crate::processor;
use actor_framework::ActorEntity;
use async_trait::async_trait;

fn ensure_price(price: f64) -> Result<f64, ProductError> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(ProductError::InvalidPrice(price))
    }
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductName;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    /// Products are keyed by name.
    fn assign_id(_seq: u32, params: &ProductCreate) -> ProductName {
        params.name.clone()
    }

    fn from_create_params(id: ProductName, params: ProductCreate) -> Result<Self, ProductError> {
        let price = ensure_price(params.price)?;
        Ok(Self::new(id, price, params.quantity))
    }

    /// Applies the supplied fields. Nothing changes if the new price is rejected.
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), ProductError> {
        let price = update.price.map(ensure_price).transpose()?;
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(quantity) = update.quantity {
            self.quantity = quantity;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::WithdrawStock(requested) => {
                let withdrawal = processor::withdraw(self.quantity, requested);
                self.quantity = withdrawal.remaining;
                Ok(ProductActionResult::WithdrawStock(withdrawal))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bolt(quantity: u32) -> Product {
        Product::new(ProductName::new("bolt"), 0.25, quantity)
    }

    #[test]
    fn test_key_is_folded_name() {
        let params = ProductCreate {
            name: ProductName::new("Bolt"),
            price: 1.0,
            quantity: 1,
        };
        assert_eq!(Product::assign_id(7, &params).as_str(), "bolt");
    }

    #[test]
    fn test_create_rejects_negative_price() {
        let params = ProductCreate {
            name: ProductName::new("bolt"),
            price: -1.0,
            quantity: 1,
        };
        let result = Product::from_create_params(ProductName::new("bolt"), params);
        assert_eq!(result, Err(ProductError::InvalidPrice(-1.0)));
    }

    #[tokio::test]
    async fn test_update_applies_only_supplied_fields() {
        let mut product = bolt(3);
        product
            .on_update(
                ProductUpdate {
                    price: None,
                    quantity: Some(9),
                },
                &(),
            )
            .await
            .unwrap();

        assert_eq!(product.price, 0.25);
        assert_eq!(product.quantity, 9);
    }

    #[tokio::test]
    async fn test_rejected_update_changes_nothing() {
        let mut product = bolt(3);
        let result = product
            .on_update(
                ProductUpdate {
                    price: Some(f64::NAN),
                    quantity: Some(9),
                },
                &(),
            )
            .await;

        assert!(matches!(result, Err(ProductError::InvalidPrice(_))));
        assert_eq!(product, bolt(3));
    }

    #[tokio::test]
    async fn test_withdraw_clamps_at_zero() {
        let mut product = bolt(3);
        let result = product
            .handle_action(ProductAction::WithdrawStock(5), &())
            .await
            .unwrap();

        assert_eq!(
            result,
            ProductActionResult::WithdrawStock(processor::Withdrawal {
                fulfilled: 3,
                remaining: 0
            })
        );
        assert_eq!(product.quantity, 0);
    }
}
