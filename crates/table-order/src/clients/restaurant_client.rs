//! # Restaurant Client
use crate::model::{Restaurant, RestaurantCreate, RestaurantId};
use crate::restaurant_actor::RestaurantError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct RestaurantClient {
    inner: ResourceClient<Restaurant>,
}

#[async_trait]
impl ActorClient<Restaurant> for RestaurantClient {
    type Error = RestaurantError;

    fn inner(&self) -> &ResourceClient<Restaurant> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<RestaurantError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => RestaurantError::NotFound(id),
            Err(other) => RestaurantError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl RestaurantClient {
    pub fn new(inner: ResourceClient<Restaurant>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn add_restaurant(
        &self,
        params: RestaurantCreate,
    ) -> Result<RestaurantId, RestaurantError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Restaurants whose name, cuisine or location contain `term`, ignoring case.
    #[instrument(skip(self))]
    pub async fn search(&self, term: &str) -> Result<Vec<Restaurant>, RestaurantError> {
        let mut restaurants = self.list().await?;
        restaurants.retain(|r| r.matches(term));
        Ok(restaurants)
    }
}
