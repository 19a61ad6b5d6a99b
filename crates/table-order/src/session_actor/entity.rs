use super::actions::{SessionAction, SessionActionResult, SubmitOutcome};
use super::error::SessionError;
use crate::clients::TableClient;
use crate::model::{OrderDraft, SessionId, SessionOpen, SessionPhase, TableSession};
use crate::table_actor::TableError;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::{info, warn};

impl TableSession {
    fn ensure_editable(&self) -> Result<(), SessionError> {
        if self.phase == SessionPhase::Submitting {
            return Err(SessionError::SubmissionInFlight);
        }
        Ok(())
    }

    /// Phase after a cart edit.
    fn settle(&mut self) {
        self.phase = if self.cart.is_empty() {
            SessionPhase::Empty
        } else {
            SessionPhase::Building
        };
    }
}

#[async_trait]
impl ActorEntity for TableSession {
    type Id = SessionId;
    type Create = SessionOpen;
    type Update = ();
    type Action = SessionAction;
    type ActionResult = SessionActionResult;
    type Context = TableClient;
    type Error = SessionError;

    fn from_create_params(id: SessionId, params: SessionOpen) -> Result<Self, SessionError> {
        Ok(Self::new(id, params.restaurant_id, params.table_id))
    }

    /// Claims the table. Fails unless it is `Available` and belongs to the restaurant.
    async fn on_create(&mut self, tables: &TableClient) -> Result<(), SessionError> {
        tables.occupy(self.table_id, self.restaurant_id).await?;
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _tables: &TableClient) -> Result<(), SessionError> {
        Ok(())
    }

    /// Releases the table. Refused while an order is being placed.
    async fn on_delete(&self, tables: &TableClient) -> Result<(), SessionError> {
        self.ensure_editable()?;
        match tables.release(self.table_id).await {
            Ok(()) => Ok(()),
            // The admin removed the table meanwhile; nothing left to release.
            Err(TableError::NotFound(table)) => {
                warn!(session = %self.id, %table, "Table already gone");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn handle_action(
        &mut self,
        action: SessionAction,
        _tables: &TableClient,
    ) -> Result<SessionActionResult, SessionError> {
        match action {
            SessionAction::AddItem {
                item_id,
                name,
                unit_price,
                quantity,
            } => {
                self.ensure_editable()?;
                let line = self
                    .cart
                    .add_item(item_id, name, unit_price, quantity)
                    .clone();
                self.settle();
                Ok(SessionActionResult::AddItem(line))
            }
            SessionAction::RemoveItem(item_id) => {
                self.ensure_editable()?;
                let removed = self.cart.remove_item(item_id);
                self.settle();
                Ok(SessionActionResult::RemoveItem(removed))
            }
            SessionAction::SetQuantity { item_id, quantity } => {
                self.ensure_editable()?;
                let line = self.cart.set_quantity(item_id, quantity).cloned();
                self.settle();
                Ok(SessionActionResult::SetQuantity(line))
            }
            SessionAction::Clear => {
                self.ensure_editable()?;
                self.cart.clear();
                self.settle();
                Ok(SessionActionResult::Clear(()))
            }
            SessionAction::BeginSubmit(tax_rate) => {
                self.ensure_editable()?;
                if self.cart.is_empty() {
                    return Err(SessionError::EmptyCart);
                }
                self.phase = SessionPhase::Submitting;
                self.last_failure = None;
                Ok(SessionActionResult::BeginSubmit(OrderDraft {
                    session_id: self.id,
                    restaurant_id: self.restaurant_id,
                    table_id: self.table_id,
                    lines: self.cart.lines().to_vec(),
                    totals: self.cart.totals(tax_rate),
                }))
            }
            SessionAction::CompleteSubmit(outcome) => {
                if self.phase != SessionPhase::Submitting {
                    return Err(SessionError::NotSubmitting);
                }
                match outcome {
                    SubmitOutcome::Placed(receipt) => {
                        self.cart.clear();
                        self.rounds_submitted += 1;
                        self.phase = SessionPhase::Submitted;
                        info!(session = %self.id, order = %receipt.order_id, round = self.rounds_submitted, "Order placed");
                    }
                    SubmitOutcome::Failed(reason) => {
                        warn!(session = %self.id, %reason, "Order failed, cart kept");
                        self.phase = SessionPhase::Failed;
                        self.last_failure = Some(reason);
                    }
                    SubmitOutcome::Cancelled => {
                        info!(session = %self.id, "Order cancelled, cart kept");
                        self.phase = SessionPhase::Building;
                    }
                }
                Ok(SessionActionResult::CompleteSubmit(self.phase))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::CartTotals;
    use crate::model::{FoodId, Money, OrderId, OrderReceipt, RestaurantId, TableId, TaxRate};
    use actor_framework::mock::MockClient;

    fn session() -> TableSession {
        TableSession::new(SessionId(1), RestaurantId(1), TableId(1))
    }

    fn salmon(quantity: u32) -> SessionAction {
        SessionAction::AddItem {
            item_id: FoodId(4),
            name: "Grilled Salmon".into(),
            unit_price: Money::from_minor(2499),
            quantity,
        }
    }

    fn receipt() -> OrderReceipt {
        OrderReceipt {
            order_id: OrderId(1),
            table_id: TableId(1),
            totals: CartTotals::default(),
        }
    }

    // Cart actions never touch the table client, so an idle mock is enough.
    fn tables() -> TableClient {
        TableClient::new(MockClient::new().client())
    }

    #[tokio::test]
    async fn edits_move_between_empty_and_building() {
        let tables = tables();
        let mut s = session();

        s.handle_action(salmon(1), &tables).await.unwrap();
        assert_eq!(s.phase, SessionPhase::Building);

        s.handle_action(SessionAction::RemoveItem(FoodId(4)), &tables)
            .await
            .unwrap();
        assert_eq!(s.phase, SessionPhase::Empty);
    }

    #[tokio::test]
    async fn empty_cart_cannot_be_submitted() {
        let tables = tables();
        let mut s = session();
        let err = s
            .handle_action(SessionAction::BeginSubmit(TaxRate::default()), &tables)
            .await
            .unwrap_err();
        assert_eq!(err, SessionError::EmptyCart);
        assert_eq!(s.phase, SessionPhase::Empty);
    }

    #[tokio::test]
    async fn submitting_locks_the_cart() {
        let tables = tables();
        let mut s = session();
        s.handle_action(salmon(2), &tables).await.unwrap();

        let SessionActionResult::BeginSubmit(draft) = s
            .handle_action(SessionAction::BeginSubmit(TaxRate::default()), &tables)
            .await
            .unwrap()
        else {
            panic!("expected a draft");
        };
        assert_eq!(draft.lines.len(), 1);
        assert_eq!(draft.totals.subtotal, Money::from_minor(4998));

        for action in [
            salmon(1),
            SessionAction::RemoveItem(FoodId(4)),
            SessionAction::SetQuantity {
                item_id: FoodId(4),
                quantity: 9,
            },
            SessionAction::Clear,
            SessionAction::BeginSubmit(TaxRate::default()),
        ] {
            let err = s.handle_action(action, &tables).await.unwrap_err();
            assert_eq!(err, SessionError::SubmissionInFlight);
        }
        assert_eq!(s.cart.line(FoodId(4)).unwrap().quantity, 2);

        let err = s.on_delete(&tables).await.unwrap_err();
        assert_eq!(err, SessionError::SubmissionInFlight);
    }

    #[tokio::test]
    async fn outcomes_settle_the_phase() {
        let tables = tables();
        let begin = SessionAction::BeginSubmit(TaxRate::default());

        // placed: cart cleared, round counted
        let mut s = session();
        s.handle_action(salmon(1), &tables).await.unwrap();
        s.handle_action(begin.clone(), &tables).await.unwrap();
        s.handle_action(
            SessionAction::CompleteSubmit(SubmitOutcome::Placed(receipt())),
            &tables,
        )
        .await
        .unwrap();
        assert_eq!(s.phase, SessionPhase::Submitted);
        assert!(s.cart.is_empty());
        assert_eq!(s.rounds_submitted, 1);

        // failed: cart kept, resubmission allowed
        let mut s = session();
        s.handle_action(salmon(1), &tables).await.unwrap();
        s.handle_action(begin.clone(), &tables).await.unwrap();
        s.handle_action(
            SessionAction::CompleteSubmit(SubmitOutcome::Failed("kitchen offline".into())),
            &tables,
        )
        .await
        .unwrap();
        assert_eq!(s.phase, SessionPhase::Failed);
        assert_eq!(s.last_failure.as_deref(), Some("kitchen offline"));
        assert_eq!(s.cart.len(), 1);
        assert!(s.handle_action(begin.clone(), &tables).await.is_ok());

        // cancelled: back to building
        let mut s = session();
        s.handle_action(salmon(1), &tables).await.unwrap();
        s.handle_action(begin, &tables).await.unwrap();
        s.handle_action(
            SessionAction::CompleteSubmit(SubmitOutcome::Cancelled),
            &tables,
        )
        .await
        .unwrap();
        assert_eq!(s.phase, SessionPhase::Building);
        assert_eq!(s.cart.len(), 1);
    }

    #[tokio::test]
    async fn completion_without_submission_is_rejected() {
        let tables = tables();
        let mut s = session();
        let err = s
            .handle_action(
                SessionAction::CompleteSubmit(SubmitOutcome::Cancelled),
                &tables,
            )
            .await
            .unwrap_err();
        assert_eq!(err, SessionError::NotSubmitting);
    }
}
