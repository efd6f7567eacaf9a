//! Cart-specific resource logic and entity implementation.
//!
//! The cart is an insertion-ordered collection of
//! [`CartLine`](crate::model::CartLine) entities owned by a single
//! [`ResourceActor`](crate::framework::ResourceActor). All mutation happens
//! through the actor's sequential event loop, so rapid repeated add taps can
//! never corrupt the collection.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CartClient;
use crate::framework::ResourceActor;
use crate::model::CartLine;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Notifications published by the cart actor.
///
/// `Emptied` is the distinguished empty-cart transition: it fires exactly once
/// when the line count goes from one to zero, carrying the id of the line whose
/// removal caused it.
#[derive(Debug, Clone, PartialEq)]
pub enum CartEvent {
    Emptied { last_line_id: String },
}

/// Runtime context injected into the cart actor.
///
/// Holds the sender half of the cart event channel; the receiver belongs to the
/// lifecycle layer, which reacts to [`CartEvent::Emptied`].
pub struct CartContext {
    pub events: mpsc::UnboundedSender<CartEvent>,
}

/// Creates a new cart actor and its client.
pub fn new() -> (ResourceActor<CartLine>, CartClient) {
    let line_id_counter = Arc::new(AtomicU64::new(1));
    let next_line_id = move || {
        let id = line_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("line_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(32, next_line_id);
    let client = CartClient::new(generic_client);

    (actor, client)
}
