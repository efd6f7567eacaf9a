use crate::cart_actor::{CartError, CartLineAction, CartLineActionResult};
use crate::checkout::{OrderTotals, Receipt};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{CartLine, CartLineCreate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the cart actor.
///
/// # Unknown identifiers
/// The framework reports `NotFound` for operations on ids that are not in the
/// store. Adjusting or removing a line that is already gone is a non-event for
/// the user, so `adjust_quantity` and `remove_line` absorb `NotFound` into
/// `Ok(None)` / `Ok(false)` rather than surfacing an error. Callers that care
/// can still distinguish the miss from the return value.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<CartLine>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<CartLine>) -> Self {
        Self { inner }
    }

    /// Appends a new line (quantity 1) to the end of the cart.
    ///
    /// Repeated adds for the same catalog item append duplicate lines; nothing
    /// is merged.
    #[instrument(skip(self, params), fields(item = %params.name))]
    pub async fn add_line(&self, params: CartLineCreate) -> Result<String, CartError> {
        debug!(?params, "add_line called");
        self.inner
            .create(params)
            .await
            .map_err(|e| CartError::ActorCommunicationError(e.to_string()))
    }

    /// Adjusts a line's quantity by `delta`, floor-clamped at 1.
    ///
    /// Returns the new quantity, or `None` if no line with that id exists.
    #[instrument(skip(self))]
    pub async fn adjust_quantity(
        &self,
        id: String,
        delta: i64,
    ) -> Result<Option<u32>, CartError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, CartLineAction::AdjustQuantity(delta))
            .await
        {
            Ok(CartLineActionResult::AdjustQuantity(quantity)) => Ok(Some(quantity)),
            Err(FrameworkError::NotFound(_)) => Ok(None),
            Err(e) => Err(CartError::ActorCommunicationError(e.to_string())),
        }
    }

    /// Removes the line with the given id.
    ///
    /// Returns `true` if a line was removed, `false` if the id was unknown.
    /// Removing the last line makes the cart actor publish
    /// [`CartEvent::Emptied`](crate::cart_actor::CartEvent::Emptied).
    #[instrument(skip(self))]
    pub async fn remove_line(&self, id: String) -> Result<bool, CartError> {
        debug!("Sending request");
        match self.inner.delete(id).await {
            Ok(()) => Ok(true),
            Err(FrameworkError::NotFound(_)) => Ok(false),
            Err(e) => Err(CartError::ActorCommunicationError(e.to_string())),
        }
    }

    /// The current ordered sequence of cart lines.
    pub async fn lines(&self) -> Result<Vec<CartLine>, CartError> {
        self.list().await
    }

    /// Derived totals for the current cart state.
    #[instrument(skip(self))]
    pub async fn totals(&self) -> Result<OrderTotals, CartError> {
        let lines = self.lines().await?;
        Ok(OrderTotals::for_lines(&lines))
    }

    /// Assembles a checkout receipt from the current lines.
    #[instrument(skip(self))]
    pub async fn receipt(&self) -> Result<Receipt, CartError> {
        let lines = self.lines().await?;
        Ok(Receipt::new(lines))
    }
}

#[async_trait]
impl ActorClient<CartLine> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<CartLine> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CartError::ActorCommunicationError(e.to_string())
    }
}
