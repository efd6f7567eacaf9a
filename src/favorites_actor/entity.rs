//! Entity trait implementation for the Favorite domain type.

use crate::framework::ActorEntity;
use crate::model::{Favorite, FavoriteCreate};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Favorite {
    type Id = String;
    type CreateParams = FavoriteCreate;
    type Action = (); // No custom actions for now
    type ActionResult = ();
    type Context = ();

    /// Creates a new Favorite from creation parameters.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String> {
        Ok(Self::new(id, params))
    }

    async fn handle_action(
        &mut self,
        _action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, String> {
        Ok(())
    }
}
