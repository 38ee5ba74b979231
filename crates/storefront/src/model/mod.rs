//! Pure data structures (DTOs) implementing the [`ActorEntity`](actor_framework::ActorEntity) trait.

pub mod order;
pub mod product;

pub use order::*;
pub use product::*;
