//! Domain clients wrapping the generic [`ResourceClient`](actor_framework::ResourceClient)s.
//!
//! Each client turns framework errors back into its actor's own error type and adds the
//! operations that only make sense for its entity.

pub mod order_client;
pub mod product_client;

pub use order_client::OrderClient;
pub use product_client::ProductClient;
