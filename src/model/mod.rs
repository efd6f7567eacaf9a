//! Pure data structures (DTOs) for the catalog, cart, and favorites.
//!
//! The mutable types here implement the
//! [`ActorEntity`](crate::framework::ActorEntity) trait so they can be managed by
//! a [`ResourceActor`](crate::framework::ResourceActor).

pub mod cart;
pub mod catalog;
pub mod favorite;

pub use cart::*;
pub use catalog::*;
pub use favorite::*;
