//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for the entire system.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the
//! `tracing` crate. Log levels are configured via the `RUST_LOG` environment
//! variable; the compact format hides the crate/module prefix
//! (`with_target(false)`) and shows span hierarchy inline.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: Startup, shutdown, and final store size
//! - **Cart Operations**: Create, Get, List, Delete, and quantity adjustments
//! - **Intent Flow**: The add-to-cart sequence (line created, notice shown,
//!   navigation requested) as hierarchical spans
//! - **Transitions**: Notice dismissal and the empty-cart event
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full payloads with debug logs
//! RUST_LOG=debug cargo run
//!
//! # Filter to specific modules
//! RUST_LOG=cafe_cart::framework=debug cargo run
//! ```
//!
//! ## Workflow Trace Example
//!
//! **With `RUST_LOG=info`** (compact):
//!
//! ```text
//! INFO add_to_cart: Created line_id="line_1" size=1
//! INFO add_to_cart: Added-to-cart notice shown item="Caramel Macchiato" add_count=1
//! INFO Navigation requested screen="order" param="Caramel Macchiato"
//! INFO Notice dismissed
//! ```
//!
//! **With `RUST_LOG=debug`**, client entry points additionally log full payloads
//! once at the start:
//!
//! ```rust,ignore
//! debug!(?params, "add_line called");
//! ```
//!
//! The `?` syntax is a `tracing` macro feature that records the variable using
//! its `Debug` representation as a structured field.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g., "add_to_cart")
        .init();
}
