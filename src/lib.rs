#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Cafe Cart
//!
//! > **The coffee-ordering core as resource-oriented actors.**
//!
//! This crate models the state layer of a coffee-ordering app: an insertion-ordered
//! shopping cart, a favorites list, checkout totals, and the transient add-to-cart
//! notice. It combines **Resource-Oriented Architecture (ROA)** with the
//! **Actor Model**: each piece of mutable state lives inside its own Tokio task and
//! all mutation flows through sequential message processing.
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why ROA + Actor Model for a cart?
//!
//! A cart is a small ordered collection under rapid, interleaved mutation
//! (add taps, quantity buttons, removals). Modelling it as a resource behind an
//! actor gives:
//! - **Sequential consistency**: Requests are processed one at a time, so two
//!   rapid add taps always produce two lines in tap order. No locks needed.
//! - **Type safety**: Compile-time guarantees for every operation.
//! - **Isolation**: The notice timers, the favorites list, and the cart never
//!   share mutable state.
//!
//! ### Generics: The Power of `T`
//! You'll see `ResourceActor<T: ActorEntity>` everywhere. This means "I can be an
//! actor for *anything*, as long as it behaves like an ActorEntity." The message
//! loop is written **once** and serves both cart lines and favorites.
//!
//! ### Mocking: Testing without Pain
//! Clients can be tested without spawning full actors. See the
//! [`framework::mock`] module for a complete guide.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Ordered Store
//! The generic store is an insertion-ordered sequence, not a map. A cart is
//! something the user reads top to bottom; `List` returns lines exactly in the
//! order they were created.
//!
//! ### 2. Async Context Injection
//! Dependencies are injected at runtime via the `run()` method, not at
//! construction time. The cart actor receives its event channel this way, which
//! is how the empty-cart transition reaches the lifecycle layer.
//!
//! ### 3. Silent No-ops at the Edge
//! The framework is strict: operations on unknown ids fail with `NotFound`. The
//! domain clients absorb that into `Ok(None)` / `Ok(false)`, because adjusting or
//! removing a line that is already gone is a non-event for the user.
//!
//! ### 4. Observability
//! We use `tracing` everywhere with structured logging. The framework creates
//! spans for each operation. See the [`lifecycle::tracing`] module for details.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` that powers everything.
//! - **Key items**: [`ActorEntity`](framework::ActorEntity), [`ResourceActor`](framework::ResourceActor).
//!
//! ### 2. The Orchestrator ([`lifecycle`])
//! Spins up the actors, wires the event channel and the navigator, and shuts
//! everything down in order.
//! - **Key items**: [`CafeSystem`](lifecycle::CafeSystem), [`shutdown`](lifecycle::CafeSystem::shutdown).
//!
//! ### 3. The Interface ([`clients`])
//! Domain-specific wrappers over the generic `ResourceClient`.
//! - **Key items**: [`CartClient`](clients::CartClient), [`FavoritesClient`](clients::FavoritesClient).
//!
//! ### 4. The Implementation ([`cart_actor`], [`favorites_actor`], [`notice`])
//! Concrete actors built using the recipe, plus the notice state machine with
//! its dismiss and navigation timers.
//!
//! ### 5. The Domain ([`model`], [`catalog`], [`checkout`], [`navigation`])
//! Pure data: cart lines and favorites, the static menu catalog, exact-decimal
//! order totals, and the fire-and-forget navigation contract.
//!
//! ## 🚀 Quick Start
//!
//! ### Running the Demo
//!
//! ```bash
//! # Run with info logs
//! RUST_LOG=info cargo run
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod cart_actor;
pub mod catalog;
pub mod checkout;
pub mod clients;
pub mod favorites_actor;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod navigation;
pub mod notice;
