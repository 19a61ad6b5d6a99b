//! # Food Client
//!
//! Menu administration and browsing. Also serves as the
//! [`MenuCatalog`](crate::ports::MenuCatalog) for ordering sessions.
use crate::food_actor::FoodError;
use crate::model::{CategoryId, Food, FoodCreate, FoodId, FoodUpdate, RestaurantId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct FoodClient {
    inner: ResourceClient<Food>,
}

#[async_trait]
impl ActorClient<Food> for FoodClient {
    type Error = FoodError;

    fn inner(&self) -> &ResourceClient<Food> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<FoodError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => FoodError::NotFound(id),
            Err(other) => FoodError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl FoodClient {
    pub fn new(inner: ResourceClient<Food>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn add_food(&self, params: FoodCreate) -> Result<FoodId, FoodError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_food(&self, id: FoodId, update: FoodUpdate) -> Result<Food, FoodError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// One restaurant's menu in the order dishes were added.
    #[instrument(skip(self))]
    pub async fn menu_of(&self, restaurant_id: RestaurantId) -> Result<Vec<Food>, FoodError> {
        let mut foods = self.list().await?;
        foods.retain(|food| food.restaurant_id == restaurant_id);
        Ok(foods)
    }

    /// Admin search: case-insensitive over name and description, optionally within one
    /// category.
    #[instrument(skip(self))]
    pub async fn search(
        &self,
        term: &str,
        category: Option<CategoryId>,
    ) -> Result<Vec<Food>, FoodError> {
        let mut foods = self.list().await?;
        foods.retain(|food| food.matches(term, category));
        Ok(foods)
    }
}
