use crate::cart_actor::CartContext;
use crate::catalog::Catalog;
use crate::cart_actor::{CartError, CartEvent};
use crate::checkout::Receipt;
use crate::clients::{CartClient, FavoritesClient};
use crate::model::{CartLineCreate, CatalogItem};
use crate::navigation::{NavRequest, Navigator, Screen, TracingNavigator};
use crate::notice::{NoticeClient, NoticeConfig};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{error, info, instrument};

/// The main runtime orchestrator for the coffee-ordering core.
///
/// `CafeSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors in the system
/// - **Dependency Wiring**: Connecting the cart's event channel and the notice
///   actor's navigator
/// - **User Intents**: Exposing the add-to-cart and checkout flows the
///   presentation layer drives
///
/// # Architecture
///
/// The system consists of three actors plus the static catalog:
/// - **Cart Actor**: Owns the ordered cart lines (add, adjust, remove)
/// - **Favorites Actor**: Owns the user's favorite items
/// - **Notice Actor**: Owns the add-to-cart confirmation notice and its timers
///
/// A background listener reacts to the cart's empty transition by requesting
/// navigation back to the menu, exactly once per transition.
///
/// # Example
///
/// ```ignore
/// let system = CafeSystem::with_defaults();
///
/// let item = system.catalog.find(4).unwrap().clone();
/// let line_id = system.add_to_cart(&item, vec!["Extra Shot".into()]).await?;
///
/// let receipt = system.checkout().await?;
/// system.shutdown().await?;
/// ```
pub struct CafeSystem {
    /// The static, read-only menu catalog.
    pub catalog: Arc<Catalog>,

    /// Client for interacting with the cart actor.
    pub cart_client: CartClient,

    /// Client for interacting with the favorites actor.
    pub favorites_client: FavoritesClient,

    /// Client for interacting with the notice actor.
    pub notice_client: NoticeClient,

    /// The navigation sink shared by the notice actor and the empty-cart
    /// listener.
    pub navigator: Arc<dyn Navigator>,

    /// Task handles for all running actors (used for graceful shutdown).
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CafeSystem {
    /// Creates and initializes a new `CafeSystem` with all actors running.
    ///
    /// This method:
    /// 1. Loads the sample catalog
    /// 2. Spawns the cart, favorites, and notice actors
    /// 3. Wires the cart's event channel into the empty-cart listener
    /// 4. Hands the navigator to the notice actor for timed navigation
    pub fn new(navigator: Arc<dyn Navigator>, notice_config: NoticeConfig) -> Self {
        let catalog = Arc::new(Catalog::sample());

        // 1. Create actors
        let (cart_actor, cart_client) = crate::cart_actor::new();
        let (favorites_actor, favorites_client) = crate::favorites_actor::new();
        let (notice_actor, notice_client) = crate::notice::new(notice_config, navigator.clone());

        // 2. Start actors with injected context
        let (events, mut event_rx) = mpsc::unbounded_channel();
        let cart_handle = tokio::spawn(cart_actor.run(CartContext { events }));
        let favorites_handle = tokio::spawn(favorites_actor.run(()));
        let notice_handle = tokio::spawn(notice_actor.run());

        // 3. React to the empty-cart transition: the order screen is no longer
        // meaningful, so request navigation back to the menu. The event fires
        // once per transition, so this cannot double-navigate.
        let nav = navigator.clone();
        let empty_listener = tokio::spawn(async move {
            while let Some(event) = event_rx.recv().await {
                match event {
                    CartEvent::Emptied { last_line_id } => {
                        info!(%last_line_id, "Cart became empty, returning to menu");
                        nav.request(NavRequest::to(Screen::Menu));
                    }
                }
            }
        });

        Self {
            catalog,
            cart_client,
            favorites_client,
            notice_client,
            navigator,
            handles: vec![cart_handle, favorites_handle, notice_handle, empty_listener],
        }
    }

    /// Creates a system with the tracing navigator and default notice timings.
    pub fn with_defaults() -> Self {
        Self::new(Arc::new(TracingNavigator), NoticeConfig::default())
    }

    /// The add-to-cart intent, in sequence:
    /// 1. A new cart line (quantity 1) is appended.
    /// 2. The confirmation notice is shown with the item and the running
    ///    add-event count; its timers dismiss it and navigate to the order
    ///    screen.
    #[instrument(skip(self, item, customizations), fields(item = %item.name))]
    pub async fn add_to_cart(
        &self,
        item: &CatalogItem,
        customizations: Vec<String>,
    ) -> Result<String, CartError> {
        let line_id = self
            .cart_client
            .add_line(CartLineCreate {
                item_id: item.id,
                name: item.name.clone(),
                unit_price: item.price,
                customizations,
            })
            .await?;

        self.notice_client
            .item_added(item.name.clone(), item.price)
            .await
            .map_err(|e| CartError::ActorCommunicationError(e.to_string()))?;

        Ok(line_id)
    }

    /// Assembles the checkout receipt for the current cart and logs the
    /// confirmation. No payment is processed.
    #[instrument(skip(self))]
    pub async fn checkout(&self) -> Result<Receipt, CartError> {
        let receipt = self.cart_client.receipt().await?;
        info!(
            lines = receipt.lines.len(),
            grand_total = %receipt.totals.grand_total,
            "Order confirmed"
        );
        Ok(receipt)
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes their channels; each actor drains its queue
    /// and exits its event loop. The cart actor dropping its context also
    /// closes the event channel, which ends the empty-cart listener.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        // Close all channels by dropping clients. The receivers return None
        // and the actors exit their loops.
        drop(self.cart_client);
        drop(self.favorites_client);
        drop(self.notice_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
