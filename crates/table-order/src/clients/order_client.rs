//! # Order Client
use crate::model::{OrderDraft, OrderId, OrderTicket, TableId};
use crate::order_actor::OrderError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<OrderTicket>,
}

#[async_trait]
impl ActorClient<OrderTicket> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<OrderTicket> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<OrderError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl OrderClient {
    pub fn new(inner: ResourceClient<OrderTicket>) -> Self {
        Self { inner }
    }

    /// Writes a ticket for the draft.
    #[instrument(skip(self, draft), fields(table = %draft.table_id))]
    pub async fn record(&self, draft: OrderDraft) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        self.inner.create(draft).await.map_err(Self::map_error)
    }

    /// Every ticket placed at one table.
    pub async fn orders_for_table(&self, table_id: TableId) -> Result<Vec<OrderTicket>, OrderError> {
        let mut orders = self.list().await?;
        orders.retain(|order| order.table_id == table_id);
        Ok(orders)
    }
}
