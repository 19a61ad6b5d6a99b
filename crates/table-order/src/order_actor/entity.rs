use super::error::OrderError;
use crate::model::{OrderDraft, OrderId, OrderStatus, OrderTicket};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for OrderTicket {
    type Id = OrderId;
    type Create = OrderDraft;
    type Update = ();
    type Action = ();
    type ActionResult = ();
    type Context = ();
    type Error = OrderError;

    fn from_create_params(id: OrderId, draft: OrderDraft) -> Result<Self, OrderError> {
        if draft.lines.is_empty() {
            return Err(OrderError::Empty);
        }
        Ok(Self {
            id,
            session_id: draft.session_id,
            restaurant_id: draft.restaurant_id,
            table_id: draft.table_id,
            lines: draft.lines,
            totals: draft.totals,
            status: OrderStatus::Received,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), OrderError> {
        Ok(())
    }

    async fn handle_action(&mut self, _action: (), _ctx: &()) -> Result<(), OrderError> {
        Ok(())
    }
}
