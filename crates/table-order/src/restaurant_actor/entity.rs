use super::error::RestaurantError;
use crate::model::{Restaurant, RestaurantCreate, RestaurantId, ValidationErrors};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Restaurant {
    type Id = RestaurantId;
    type Create = RestaurantCreate;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = RestaurantError;

    fn from_create_params(
        id: RestaurantId,
        params: RestaurantCreate,
    ) -> Result<Self, RestaurantError> {
        let mut errors = ValidationErrors::new();
        errors.require_text("name", &params.name, "Restaurant name is required");
        errors.require_text("location", &params.location, "Address is required");
        errors.into_result().map_err(RestaurantError::Validation)?;

        Ok(Self {
            id,
            name: params.name,
            location: params.location,
            cuisine: params.cuisine,
            rating: params.rating,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), RestaurantError> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), RestaurantError> {
        Ok(())
    }
}
