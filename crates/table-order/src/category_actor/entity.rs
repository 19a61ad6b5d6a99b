use super::error::CategoryError;
use crate::model::{Category, CategoryCreate, CategoryId, CategoryUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Category {
    type Id = CategoryId;
    type Create = CategoryCreate;
    type Update = CategoryUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = CategoryError;

    fn from_create_params(id: CategoryId, params: CategoryCreate) -> Result<Self, CategoryError> {
        let category = Self {
            id,
            name: params.name.trim().to_string(),
            image: params.image.trim().to_string(),
        };
        category.validate().map_err(CategoryError::Validation)?;
        Ok(category)
    }

    /// Applies the given fields, then re-validates the whole category.
    async fn on_update(&mut self, update: CategoryUpdate, _ctx: &()) -> Result<(), CategoryError> {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(image) = update.image {
            self.image = image.trim().to_string();
        }
        self.validate().map_err(CategoryError::Validation)
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), CategoryError> {
        Ok(())
    }
}
