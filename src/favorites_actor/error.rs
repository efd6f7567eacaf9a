//! Error types for the favorites actor.

use thiserror::Error;

/// Errors that can occur during favorites operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FavoriteError {
    /// The requested favorite was not found.
    #[error("Favorite not found: {0}")]
    NotFound(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for FavoriteError {
    fn from(msg: String) -> Self {
        FavoriteError::ActorCommunicationError(msg)
    }
}
