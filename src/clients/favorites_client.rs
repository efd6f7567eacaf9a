use crate::clients::actor_client::ActorClient;
use crate::favorites_actor::FavoriteError;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Favorite, FavoriteCreate};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the favorites actor.
#[derive(Clone)]
pub struct FavoritesClient {
    inner: ResourceClient<Favorite>,
}

impl FavoritesClient {
    pub fn new(inner: ResourceClient<Favorite>) -> Self {
        Self { inner }
    }

    /// Marks an item as a favorite.
    #[instrument(skip(self, params), fields(item = %params.name))]
    pub async fn add_favorite(&self, params: FavoriteCreate) -> Result<String, FavoriteError> {
        debug!(?params, "add_favorite called");
        self.inner
            .create(params)
            .await
            .map_err(|e| FavoriteError::ActorCommunicationError(e.to_string()))
    }

    /// The current favorites, in the order they were added.
    pub async fn favorites(&self) -> Result<Vec<Favorite>, FavoriteError> {
        self.list().await
    }

    /// Removes a favorite. Unknown ids are a silent no-op, matching the cart.
    #[instrument(skip(self))]
    pub async fn remove_favorite(&self, id: String) -> Result<bool, FavoriteError> {
        debug!("Sending request");
        match self.inner.delete(id).await {
            Ok(()) => Ok(true),
            Err(FrameworkError::NotFound(_)) => Ok(false),
            Err(e) => Err(FavoriteError::ActorCommunicationError(e.to_string())),
        }
    }
}

#[async_trait]
impl ActorClient<Favorite> for FavoritesClient {
    type Error = FavoriteError;

    fn inner(&self) -> &ResourceClient<Favorite> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        FavoriteError::ActorCommunicationError(e.to_string())
    }
}
