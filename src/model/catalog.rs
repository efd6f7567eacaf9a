//! Read-only catalog types.
//!
//! Catalog data is a fixture: it is supplied fully formed at startup and never
//! mutated, so it is plain data rather than an actor-managed entity. See
//! [`crate::catalog::Catalog`] for the store and its queries.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Menu category tabs, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Featured,
    Classic,
    Iced,
    Seasonal,
}

impl Category {
    /// All categories in the order the menu presents them.
    pub const ALL: [Category; 4] = [
        Category::Featured,
        Category::Classic,
        Category::Iced,
        Category::Seasonal,
    ];
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = match self {
            Category::Featured => "featured",
            Category::Classic => "classic",
            Category::Iced => "iced",
            Category::Seasonal => "seasonal",
        };
        write!(f, "{}", key)
    }
}

/// A purchasable menu item.
///
/// `rating`, `reviews`, and `preparation_time` are display attributes only; cart
/// logic never reads them. `price` is an exact decimal currency amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub category: Category,
    pub rating: f32,
    pub reviews: u32,
    pub preparation_time: String,
}

impl CatalogItem {
    /// Creates a new CatalogItem instance.
    ///
    /// # Arguments
    /// * `id` - Unique identifier within the catalog
    /// * `name` - Display name
    /// * `description` - Descriptive text shown on the menu card
    /// * `price` - Unit price
    /// * `category` - Menu category tab the item appears under
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: u32,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Decimal,
        category: Category,
        rating: f32,
        reviews: u32,
        preparation_time: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            price,
            category,
            rating,
            reviews,
            preparation_time: preparation_time.into(),
        }
    }
}
