//! Menu lookup.

use crate::clients::FoodClient;
use crate::model::{Food, FoodId, RestaurantId};
use actor_framework::ActorClient;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    #[error("Menu catalog unavailable: {0}")]
    Unavailable(String),
}

/// Where the session client looks dishes up. The result is trusted for the rest of the
/// session; prices are not re-checked at checkout.
#[async_trait]
pub trait MenuCatalog: Send + Sync {
    /// Orderable dishes of one restaurant, in menu order.
    async fn menu(&self, restaurant_id: RestaurantId) -> Result<Vec<Food>, CatalogError>;

    /// One dish, if it is on that restaurant's menu.
    async fn item(
        &self,
        restaurant_id: RestaurantId,
        item_id: FoodId,
    ) -> Result<Option<Food>, CatalogError> {
        Ok(self
            .menu(restaurant_id)
            .await?
            .into_iter()
            .find(|food| food.id == item_id))
    }
}

#[async_trait]
impl MenuCatalog for FoodClient {
    async fn menu(&self, restaurant_id: RestaurantId) -> Result<Vec<Food>, CatalogError> {
        self.menu_of(restaurant_id)
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))
    }

    async fn item(
        &self,
        restaurant_id: RestaurantId,
        item_id: FoodId,
    ) -> Result<Option<Food>, CatalogError> {
        let food = self
            .get(item_id)
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;
        Ok(food.filter(|food| food.restaurant_id == restaurant_id))
    }
}

/// A fixed menu, for running the session flow without a food actor.
#[derive(Debug, Clone, Default)]
pub struct StaticMenu {
    items: Vec<Food>,
}

impl StaticMenu {
    pub fn new(items: Vec<Food>) -> Self {
        Self { items }
    }
}

#[async_trait]
impl MenuCatalog for StaticMenu {
    async fn menu(&self, restaurant_id: RestaurantId) -> Result<Vec<Food>, CatalogError> {
        Ok(self
            .items
            .iter()
            .filter(|food| food.restaurant_id == restaurant_id)
            .cloned()
            .collect())
    }
}
