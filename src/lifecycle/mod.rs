//! Orchestration layer: spawns the actors, wires them together, and manages
//! graceful shutdown.

pub mod cafe_system;
pub mod tracing;

pub use cafe_system::*;
