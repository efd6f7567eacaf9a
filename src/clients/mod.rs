//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod cart_client;
pub mod favorites_client;

pub use cart_client::*;
pub use favorites_client::*;
