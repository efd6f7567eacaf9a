//! # Cafe Cart Demo
//!
//! Drives the coffee-ordering core end to end:
//! 1. Setting up the [`CafeSystem`] (catalog, cart, favorites, notice).
//! 2. Adding items to the cart, including a rapid duplicate add.
//! 3. Adjusting quantities and reading the running totals.
//! 4. Checking out for a receipt.
//! 5. Removing every line to trigger the empty-cart navigation.

use cafe_cart::lifecycle::tracing::setup_tracing;
use cafe_cart::lifecycle::CafeSystem;
use cafe_cart::model::FavoriteCreate;
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting cafe cart demo");

    let system = CafeSystem::with_defaults();

    let macchiato = system
        .catalog
        .find(4)
        .ok_or("catalog item 4 missing")?
        .clone();
    let iced_latte = system
        .catalog
        .find(17)
        .ok_or("catalog item 17 missing")?
        .clone();

    let span = tracing::info_span!("ordering");
    let (first_line, latte_line) = async {
        info!("Adding items to cart");
        let first = system
            .add_to_cart(
                &macchiato,
                vec!["Extra Shot".to_string(), "Less Sweet".to_string()],
            )
            .await
            .map_err(|e| e.to_string())?;

        // A second tap on the same item appends another line.
        let _second = system
            .add_to_cart(&macchiato, vec![])
            .await
            .map_err(|e| e.to_string())?;

        let latte = system
            .add_to_cart(&iced_latte, vec!["Oat Milk".to_string()])
            .await
            .map_err(|e| e.to_string())?;

        Ok::<_, String>((first, latte))
    }
    .instrument(span)
    .await?;

    // Bump the latte up to two cups.
    let quantity = system
        .cart_client
        .adjust_quantity(latte_line.clone(), 1)
        .await
        .map_err(|e| e.to_string())?;
    info!(line_id = %latte_line, ?quantity, "Quantity adjusted");

    let totals = system.cart_client.totals().await.map_err(|e| e.to_string())?;
    info!(
        subtotal = %totals.subtotal,
        grand_total = %totals.grand_total,
        "Running totals"
    );

    let receipt = system.checkout().await.map_err(|e| e.to_string())?;
    info!(lines = receipt.lines.len(), "Receipt assembled");

    // Keep a favorite around for next time.
    let favorite_id = system
        .favorites_client
        .add_favorite(FavoriteCreate {
            item_id: macchiato.id,
            name: macchiato.name.clone(),
            price: macchiato.price,
        })
        .await
        .map_err(|e| e.to_string())?;
    info!(favorite_id = %favorite_id, "Favorite saved");

    // Empty the cart line by line; removing the last one publishes the
    // empty-cart event and navigation back to the menu is requested.
    for line in system.cart_client.lines().await.map_err(|e| e.to_string())? {
        let removed = system
            .cart_client
            .remove_line(line.id)
            .await
            .map_err(|e| e.to_string())?;
        info!(removed, "Line removed");
    }

    // The first line is already gone, so this is a silent no-op.
    let removed = system
        .cart_client
        .remove_line(first_line)
        .await
        .map_err(|e| e.to_string())?;
    info!(removed, "Repeat removal");

    system.shutdown().await?;

    info!("Demo completed successfully");
    Ok(())
}
