//! Custom actions for the cart actor.
//!
//! This module defines the domain-specific operations (Actions) that can be
//! performed on a [`CartLine`](crate::model::CartLine) beyond standard lifecycle
//! operations. These actions are handled by the
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action)
//! method.

/// Custom actions for CartLine entities.
#[derive(Debug, Clone)]
pub enum CartLineAction {
    /// Adjusts the quantity by a signed delta.
    ///
    /// The result is floor-clamped at 1: a delta that would take the quantity
    /// to zero or below leaves it at 1. Adjusting never removes the line; that
    /// only happens through an explicit delete.
    AdjustQuantity(i64),
}

/// Results from CartLineActions - variants match 1:1 with CartLineAction
#[derive(Debug, Clone)]
pub enum CartLineActionResult {
    /// Result from AdjustQuantity - returns the quantity after clamping
    AdjustQuantity(u32),
}
