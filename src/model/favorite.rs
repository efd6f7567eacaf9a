//! Favorite item types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog item the user has marked as a favorite.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing favorites to be managed by a
/// [`ResourceActor`](crate::framework::ResourceActor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Favorite {
    pub id: String,
    /// Catalog id of the favorited item.
    pub item_id: u32,
    pub name: String,
    pub price: Decimal,
}

/// Payload for marking an item as a favorite.
#[derive(Debug, Clone)]
pub struct FavoriteCreate {
    pub item_id: u32,
    pub name: String,
    pub price: Decimal,
}

impl Favorite {
    pub fn new(id: impl Into<String>, params: FavoriteCreate) -> Self {
        Self {
            id: id.into(),
            item_id: params.item_id,
            name: params.name,
            price: params.price,
        }
    }
}
