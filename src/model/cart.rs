//! Cart line types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// One entry in the shopping cart.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](crate::framework::ActorEntity) trait,
/// allowing the cart to be managed by a
/// [`ResourceActor`](crate::framework::ResourceActor) as an ordered sequence of
/// lines.
///
/// # Invariants
/// - `quantity` is always ≥ 1; the adjust action floor-clamps and never removes
///   the line.
/// - Name and unit price are denormalized copies of the originating
///   [`CatalogItem`](crate::model::CatalogItem); repeated adds of the same item
///   produce distinct lines, never a merged quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    /// Catalog id of the originating item.
    pub item_id: u32,
    pub name: String,
    pub unit_price: Decimal,
    pub quantity: u32,
    /// Free-text customizations, preserved in the order the user picked them.
    pub customizations: Vec<String>,
    /// Creation time in unix milliseconds. Ordering/debugging only.
    pub created_at_ms: u64,
}

/// Payload for adding a line to the cart.
#[derive(Debug, Clone)]
pub struct CartLineCreate {
    pub item_id: u32,
    pub name: String,
    pub unit_price: Decimal,
    pub customizations: Vec<String>,
}

impl CartLine {
    /// Creates a new CartLine with quantity 1.
    ///
    /// # Arguments
    /// * `id` - Unique identifier (set by the actor system)
    /// * `params` - The originating item's denormalized data plus customizations
    pub fn new(id: impl Into<String>, params: CartLineCreate) -> Self {
        let created_at_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self {
            id: id.into(),
            item_id: params.item_id,
            name: params.name,
            unit_price: params.unit_price,
            quantity: 1,
            customizations: params.customizations,
            created_at_ms,
        }
    }

    /// Extended price for this line (unit price × quantity), exact.
    pub fn line_total(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}
