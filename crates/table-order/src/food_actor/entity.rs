use super::error::FoodError;
use crate::clients::CategoryClient;
use crate::model::{CategoryId, Food, FoodCreate, FoodId, FoodUpdate};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;

async fn ensure_category(categories: &CategoryClient, id: CategoryId) -> Result<(), FoodError> {
    match categories.get(id).await {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(FoodError::UnknownCategory(id.to_string())),
        Err(e) => Err(FoodError::ActorCommunicationError(e.to_string())),
    }
}

#[async_trait]
impl ActorEntity for Food {
    type Id = FoodId;
    type Create = FoodCreate;
    type Update = FoodUpdate;
    type Action = ();
    type ActionResult = ();
    type Context = CategoryClient;
    type Error = FoodError;

    fn from_create_params(id: FoodId, params: FoodCreate) -> Result<Self, FoodError> {
        let food = Self {
            id,
            restaurant_id: params.restaurant_id,
            category_id: params.category_id,
            name: params.name.trim().to_string(),
            description: params.description.trim().to_string(),
            price: params.price,
            image: params.image.trim().to_string(),
        };
        food.validate().map_err(FoodError::Validation)?;
        Ok(food)
    }

    async fn on_create(&mut self, categories: &CategoryClient) -> Result<(), FoodError> {
        ensure_category(categories, self.category_id).await
    }

    async fn on_update(
        &mut self,
        update: FoodUpdate,
        categories: &CategoryClient,
    ) -> Result<(), FoodError> {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = update.description {
            self.description = description.trim().to_string();
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(image) = update.image {
            self.image = image.trim().to_string();
        }
        self.validate().map_err(FoodError::Validation)?;

        if let Some(category_id) = update.category_id {
            if category_id != self.category_id {
                ensure_category(categories, category_id).await?;
                self.category_id = category_id;
            }
        }
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &CategoryClient) -> Result<(), FoodError> {
        Ok(())
    }
}
