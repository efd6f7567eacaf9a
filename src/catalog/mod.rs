//! The static, read-only menu catalog.
//!
//! The catalog is a fixture: every item is known at startup and nothing mutates
//! it, so it lives behind an `Arc` in the system rather than behind an actor.
//! Queries return items grouped by [`Category`] in fixture order.

use crate::model::{CatalogItem, Category};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// The read-only set of purchasable items, grouped by category.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Builds a catalog from an ordered list of items.
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// All items under the given category, in fixture order.
    pub fn items(&self, category: Category) -> Vec<&CatalogItem> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// Looks up a single item by catalog id.
    pub fn find(&self, id: u32) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Total number of items across all categories.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The sample menu shipped with the application.
    pub fn sample() -> Self {
        use Category::*;

        fn item(
            id: u32,
            name: &str,
            description: &str,
            price: Decimal,
            category: Category,
            rating: f32,
            reviews: u32,
            preparation_time: &str,
        ) -> CatalogItem {
            CatalogItem::new(
                id,
                name,
                description,
                price,
                category,
                rating,
                reviews,
                preparation_time,
            )
        }

        Self::new(vec![
            // Featured
            item(1, "Artisan Latte", "Smooth espresso with velvety steamed milk and delicate foam", dec!(4.75), Featured, 4.8, 142, "3-4 min"),
            item(2, "Signature Espresso", "Intense and robust single-origin coffee shot with rich crema", dec!(3.50), Featured, 4.6, 89, "2-3 min"),
            item(3, "Honey Cinnamon Latte", "Sweet honey and warm cinnamon infused latte with organic ingredients", dec!(5.25), Featured, 4.9, 203, "4-5 min"),
            item(4, "Caramel Macchiato", "Layered espresso with vanilla syrup and caramel drizzle masterpiece", dec!(5.50), Featured, 4.7, 178, "4-5 min"),
            item(5, "Vanilla Bean Latte", "Real vanilla bean infused latte with delicate foam art", dec!(5.75), Featured, 4.8, 156, "4-5 min"),
            item(6, "Mocha Dream", "Rich chocolate and espresso delight with whipped cream", dec!(5.95), Featured, 4.9, 234, "5-6 min"),
            // Classic
            item(7, "Cappuccino Classico", "Perfect balance of espresso, steamed milk, and thick foam", dec!(4.50), Classic, 4.7, 156, "4-5 min"),
            item(8, "Americano Elegante", "Rich espresso diluted with hot water for smooth complexity", dec!(3.75), Classic, 4.4, 78, "3-4 min"),
            item(9, "Flat White", "Velvety microfoam over a double ristretto shot", dec!(4.95), Classic, 4.8, 134, "4-5 min"),
            item(10, "Cortado", "Equal parts espresso and warm milk in perfect harmony", dec!(4.25), Classic, 4.5, 92, "3-4 min"),
            item(11, "Macchiato", "Espresso stained with a dollop of foam artistry", dec!(3.95), Classic, 4.3, 67, "2-3 min"),
            item(12, "Red Eye", "Brewed coffee with an espresso shot for extra kick", dec!(4.75), Classic, 4.6, 89, "3-4 min"),
            item(13, "Cafe Au Lait", "French-style coffee with steamed milk", dec!(4.35), Classic, 4.2, 56, "3-4 min"),
            item(14, "Doppio", "Double shot of pure espresso intensity", dec!(4.25), Classic, 4.7, 112, "2-3 min"),
            // Iced
            item(15, "Iced Caramel Macchiato", "Layered iced coffee with vanilla and caramel drizzle masterpiece", dec!(5.75), Iced, 4.9, 203, "4-5 min"),
            item(16, "Cold Brew Reserve", "Smooth 20-hour steeped cold brew with chocolate notes", dec!(4.95), Iced, 4.8, 167, "1-2 min"),
            item(17, "Iced Vanilla Latte", "Chilled espresso with vanilla syrup and milk perfection", dec!(5.25), Iced, 4.7, 145, "3-4 min"),
            item(18, "Nitro Cold Brew", "Cascading cold brew infused with nitrogen for creamy texture", dec!(5.50), Iced, 4.9, 189, "1-2 min"),
            item(19, "Iced Mocha", "Chocolate espresso delight served chilled with whipped cream", dec!(5.75), Iced, 4.6, 123, "4-5 min"),
            item(20, "Iced Americano", "Espresso shots poured over ice and filtered water", dec!(4.25), Iced, 4.4, 89, "2-3 min"),
            item(21, "Iced Matcha Latte", "Premium matcha powder with milk and ice", dec!(5.95), Iced, 4.8, 178, "3-4 min"),
            item(22, "Iced Chai Latte", "Spiced chai tea with milk and ice refreshment", dec!(5.45), Iced, 4.7, 156, "3-4 min"),
            // Seasonal
            item(23, "Pumpkin Spice Delight", "Seasonal favorite with pumpkin and warming spices", dec!(5.95), Seasonal, 4.9, 312, "4-5 min"),
            item(24, "Peppermint Mocha Dream", "Festive blend of chocolate and refreshing peppermint", dec!(5.75), Seasonal, 4.7, 198, "5-6 min"),
            item(25, "Maple Pecan Latte", "Warm maple and toasted pecan infused latte delight", dec!(5.65), Seasonal, 4.8, 167, "4-5 min"),
            item(26, "Cinnamon Roll Latte", "Creamy latte with cinnamon and cream cheese foam", dec!(5.85), Seasonal, 4.9, 223, "5-6 min"),
            item(27, "Toasted White Chocolate Mocha", "Caramelized white chocolate with espresso elegance", dec!(6.25), Seasonal, 4.8, 178, "5-6 min"),
            item(28, "Chestnut Praline Latte", "Roasted chestnut and praline infused winter delight", dec!(5.95), Seasonal, 4.7, 145, "4-5 min"),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_catalog_covers_every_category() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.len(), 28);

        let expected = [6, 8, 8, 6];
        for (category, count) in Category::ALL.into_iter().zip(expected) {
            assert_eq!(catalog.items(category).len(), count, "{}", category);
        }
    }

    #[test]
    fn category_queries_preserve_fixture_order() {
        let catalog = Catalog::sample();
        let featured = catalog.items(Category::Featured);
        let names: Vec<_> = featured.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Artisan Latte",
                "Signature Espresso",
                "Honey Cinnamon Latte",
                "Caramel Macchiato",
                "Vanilla Bean Latte",
                "Mocha Dream",
            ]
        );
    }

    #[test]
    fn find_by_id() {
        let catalog = Catalog::sample();
        let item = catalog.find(4).expect("item 4 exists");
        assert_eq!(item.name, "Caramel Macchiato");
        assert_eq!(item.price, dec!(5.50));
        assert!(catalog.find(999).is_none());
    }
}
