//! Entity trait implementation for the CartLine domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation that enables
//! [`CartLine`] to be managed by the generic
//! [`crate::framework::ResourceActor`].

use crate::cart_actor::actions::{CartLineAction, CartLineActionResult};
use crate::cart_actor::{CartContext, CartEvent};
use crate::framework::ActorEntity;
use crate::model::{CartLine, CartLineCreate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for CartLine {
    type Id = String;
    type CreateParams = CartLineCreate;
    type Action = CartLineAction;
    type ActionResult = CartLineActionResult;
    type Context = CartContext;

    /// Creates a new CartLine from creation parameters. Quantity starts at 1.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String> {
        Ok(Self::new(id, params))
    }

    /// Publishes the empty-cart transition when the last line is removed.
    ///
    /// The consuming layer reacts to this exactly once per transition (it
    /// navigates away from the order screen), so it is an event rather than
    /// something re-derived from the line count on every read.
    async fn on_last_removed(&self, ctx: &Self::Context) {
        let _ = ctx.events.send(CartEvent::Emptied {
            last_line_id: self.id.clone(),
        });
    }

    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, String> {
        match action {
            CartLineAction::AdjustQuantity(delta) => {
                // Saturate then clamp: quantity stays in 1..=u32::MAX for any
                // delta, including i64::MAX / i64::MIN.
                let next = i64::from(self.quantity)
                    .saturating_add(delta)
                    .clamp(1, i64::from(u32::MAX));
                self.quantity = next as u32;
                Ok(CartLineActionResult::AdjustQuantity(self.quantity))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use tokio::sync::mpsc::unbounded_channel;

    fn line() -> CartLine {
        CartLine::new(
            "line_1",
            CartLineCreate {
                item_id: 3,
                name: "Honey Cinnamon Latte".into(),
                unit_price: dec!(5.25),
                customizations: vec!["Less Sweet".into()],
            },
        )
    }

    fn ctx() -> CartContext {
        let (events, _rx) = unbounded_channel();
        CartContext { events }
    }

    #[tokio::test]
    async fn adjust_quantity_clamps_at_one() {
        let mut l = line();
        let ctx = ctx();

        let result = l
            .handle_action(CartLineAction::AdjustQuantity(-1), &ctx)
            .await
            .unwrap();
        assert!(matches!(result, CartLineActionResult::AdjustQuantity(1)));
        assert_eq!(l.quantity, 1);

        // Large negative deltas clamp the same way.
        l.quantity = 4;
        l.handle_action(CartLineAction::AdjustQuantity(-1000), &ctx)
            .await
            .unwrap();
        assert_eq!(l.quantity, 1);
    }

    #[tokio::test]
    async fn adjust_quantity_saturates_on_extreme_deltas() {
        let mut l = line();
        let ctx = ctx();

        // i64::MAX must not overflow the addition; it caps at u32::MAX.
        let result = l
            .handle_action(CartLineAction::AdjustQuantity(i64::MAX), &ctx)
            .await
            .unwrap();
        assert!(matches!(
            result,
            CartLineActionResult::AdjustQuantity(u32::MAX)
        ));
        assert_eq!(l.quantity, u32::MAX);

        // And i64::MIN from up there clamps back to the floor.
        l.handle_action(CartLineAction::AdjustQuantity(i64::MIN), &ctx)
            .await
            .unwrap();
        assert_eq!(l.quantity, 1);
    }

    #[tokio::test]
    async fn adjust_quantity_increments() {
        let mut l = line();
        let ctx = ctx();

        l.handle_action(CartLineAction::AdjustQuantity(1), &ctx)
            .await
            .unwrap();
        l.handle_action(CartLineAction::AdjustQuantity(2), &ctx)
            .await
            .unwrap();
        assert_eq!(l.quantity, 4);
    }
}
