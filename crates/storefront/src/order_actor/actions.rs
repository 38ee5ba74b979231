//! Custom actions for the Order actor.

/// Custom actions for Order entities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderAction {
    /// Withdraws every line item from stock and marks the order completed.
    ///
    /// `processed_at` is stored verbatim as `date_processed`.
    Process { processed_at: String },
}
