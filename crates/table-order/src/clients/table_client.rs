//! # Table Client
//!
//! Admin table management plus the occupancy calls sessions make.
use crate::model::{DiningTable, RestaurantId, TableCreate, TableId, TableStatus, TableUpdate};
use crate::table_actor::{TableAction, TableActionResult, TableError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct TableClient {
    inner: ResourceClient<DiningTable>,
}

#[async_trait]
impl ActorClient<DiningTable> for TableClient {
    type Error = TableError;

    fn inner(&self) -> &ResourceClient<DiningTable> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<TableError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => TableError::NotFound(id),
            Err(other) => TableError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl TableClient {
    pub fn new(inner: ResourceClient<DiningTable>) -> Self {
        Self { inner }
    }

    /// Adds a table. The number must be unique within the restaurant.
    #[instrument(skip(self))]
    pub async fn add_table(&self, params: TableCreate) -> Result<TableId, TableError> {
        debug!("Sending request");
        if params.number != 0 {
            let taken = self
                .tables_of(params.restaurant_id)
                .await?
                .iter()
                .any(|table| table.number == params.number);
            if taken {
                let mut errors = params.validate().err().unwrap_or_default();
                errors.add("number", "Table number already exists");
                return Err(TableError::Validation(errors));
            }
        }
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Tables of one restaurant, in the order they were added.
    #[instrument(skip(self))]
    pub async fn tables_of(&self, restaurant_id: RestaurantId) -> Result<Vec<DiningTable>, TableError> {
        let mut tables = self.list().await?;
        tables.retain(|table| table.restaurant_id == restaurant_id);
        Ok(tables)
    }

    /// Tables a diner may pick.
    pub async fn available_tables(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<DiningTable>, TableError> {
        let mut tables = self.tables_of(restaurant_id).await?;
        tables.retain(|table| table.status == TableStatus::Available);
        Ok(tables)
    }

    #[instrument(skip(self))]
    pub async fn update_table(&self, id: TableId, update: TableUpdate) -> Result<DiningTable, TableError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Sets the status and returns the previous one.
    #[instrument(skip(self))]
    pub async fn set_status(&self, id: TableId, status: TableStatus) -> Result<TableStatus, TableError> {
        match self.act(id, TableAction::SetStatus(status)).await? {
            TableActionResult::SetStatus(previous) => Ok(previous),
            _ => unreachable!("SetStatus action must return SetStatus result"),
        }
    }

    /// Claims an available table for a session of `restaurant_id`.
    #[instrument(skip(self))]
    pub async fn occupy(&self, id: TableId, restaurant_id: RestaurantId) -> Result<(), TableError> {
        match self.act(id, TableAction::Occupy { restaurant_id }).await? {
            TableActionResult::Occupy(()) => Ok(()),
            _ => unreachable!("Occupy action must return Occupy result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn release(&self, id: TableId) -> Result<(), TableError> {
        match self.act(id, TableAction::Release).await? {
            TableActionResult::Release(()) => Ok(()),
            _ => unreachable!("Release action must return Release result"),
        }
    }

    async fn act(&self, id: TableId, action: TableAction) -> Result<TableActionResult, TableError> {
        debug!(?action, "Sending action");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}
