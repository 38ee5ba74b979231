//! # Order Processing
//!
//! Moves an order from pending to completed and takes its line items out of stock.
//!
//! Stock is withdrawn one line item at a time through a [`StockLedger`]; every withdrawal is
//! committed by the product actor as soon as it is answered. When a product holds less than
//! the line item asks for, the line item is cut down to what was on the shelf and the
//! product drops to zero. The caller is never told about the shortfall other than through
//! the rewritten line item quantities.

use crate::model::{Order, ProductName};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use chrono::{DateTime, Local, TimeZone};

/// Format of `date_processed`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Outcome of taking a quantity out of one product's stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Withdrawal {
    /// Quantity actually taken; recorded back on the line item.
    pub fulfilled: u32,
    /// Stock left on the product.
    pub remaining: u32,
}

/// Takes `requested` out of `stock`, clamping at zero.
pub fn withdraw(stock: u32, requested: u32) -> Withdrawal {
    match stock.checked_sub(requested) {
        Some(remaining) => Withdrawal {
            fulfilled: requested,
            remaining,
        },
        None => Withdrawal {
            fulfilled: stock,
            remaining: 0,
        },
    }
}

/// Stock source used while processing an order.
#[async_trait]
pub trait StockLedger: Send + Sync {
    /// Withdraws from one product and persists the new stock level before returning.
    async fn withdraw(
        &self,
        product: &ProductName,
        requested: u32,
    ) -> Result<Withdrawal, OrderError>;
}

/// Processes a pending order in place.
///
/// Line items are handled in stored order. If a withdrawal fails, the stock taken for the
/// items before it stays taken, while the order itself is left exactly as it was: pending,
/// with its requested quantities.
pub async fn process<L>(order: &mut Order, ledger: &L, processed_at: String) -> Result<(), OrderError>
where
    L: StockLedger + ?Sized,
{
    if order.completed {
        return Err(OrderError::AlreadyProcessed(order.id));
    }

    let mut fulfilled = Vec::with_capacity(order.products.len());
    for item in &order.products {
        let withdrawal = ledger.withdraw(&item.product_name, item.quantity).await?;
        if withdrawal.fulfilled != item.quantity {
            tracing::info!(
                order_id = %order.id,
                product = %item.product_name,
                requested = item.quantity,
                fulfilled = withdrawal.fulfilled,
                "Line item clamped to available stock"
            );
        }
        fulfilled.push(withdrawal.fulfilled);
    }

    // line items are only rewritten once every withdrawal went through
    for (item, quantity) in order.products.iter_mut().zip(fulfilled) {
        item.quantity = quantity;
    }
    order.date_processed = Some(processed_at);
    order.completed = true;
    Ok(())
}

/// Formats an instant the way `date_processed` stores it.
pub fn timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Local wall-clock time, formatted for `date_processed`.
pub fn now_timestamp() -> String {
    timestamp(&Local::now())
}
