//! Custom actions for the Product actor.
//!
//! Handled by [`ActorEntity::handle_action`](actor_framework::ActorEntity::handle_action) on
//! [`Product`](crate::model::Product).

use crate::processor::Withdrawal;

/// Custom actions for Product entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductAction {
    /// Takes up to the given quantity out of stock.
    ///
    /// Never fails for lack of stock: a request larger than the stock takes everything that
    /// is left and the product ends at zero.
    WithdrawStock(u32),
}

/// Results from ProductActions - variants match 1:1 with ProductAction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductActionResult {
    WithdrawStock(Withdrawal),
}
