//! Favorites-specific resource logic and entity implementation.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::FavoritesClient;
use crate::framework::ResourceActor;
use crate::model::Favorite;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new favorites actor and its client.
pub fn new() -> (ResourceActor<Favorite>, FavoritesClient) {
    let favorite_id_counter = Arc::new(AtomicU64::new(1));
    let next_favorite_id = move || {
        let id = favorite_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("favorite_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(32, next_favorite_id);
    let client = FavoritesClient::new(generic_client);

    (actor, client)
}
