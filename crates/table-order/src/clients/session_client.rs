//! # Session Client
//!
//! The diner-facing API: open a table, build the cart, place the order.
//!
//! The client owns the steps that need collaborators outside the session actor. It looks
//! dishes up in the [`MenuCatalog`], drives checkout against an [`OrderSink`] and sends
//! [`Notification`]s. The actor itself only sees finished values.
use crate::cart::{Cart, CartLine, CartTotals};
use crate::model::{
    FoodId, OrderReceipt, RestaurantId, SessionId, SessionOpen, SessionPhase, TableId,
    TableSession, TaxRate,
};
use crate::ports::{MenuCatalog, Notification, Notifier, OrderSink};
use crate::session_actor::{SessionAction, SessionActionResult, SessionError, SubmitOutcome};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, instrument, warn};

#[derive(Clone)]
pub struct SessionClient {
    inner: ResourceClient<TableSession>,
    catalog: Arc<dyn MenuCatalog>,
    notifier: Arc<dyn Notifier>,
    tax_rate: TaxRate,
}

#[async_trait]
impl ActorClient<TableSession> for SessionClient {
    type Error = SessionError;

    fn inner(&self) -> &ResourceClient<TableSession> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e.downcast_entity::<SessionError>() {
            Ok(err) => err,
            Err(FrameworkError::NotFound(id)) => SessionError::NotFound(id),
            Err(other) => SessionError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl SessionClient {
    pub fn new(
        inner: ResourceClient<TableSession>,
        catalog: Arc<dyn MenuCatalog>,
        notifier: Arc<dyn Notifier>,
        tax_rate: TaxRate,
    ) -> Self {
        Self {
            inner,
            catalog,
            notifier,
            tax_rate,
        }
    }

    pub fn tax_rate(&self) -> TaxRate {
        self.tax_rate
    }

    /// Seats a party: the table must be available and belong to the restaurant.
    #[instrument(skip(self))]
    pub async fn open_session(
        &self,
        restaurant_id: RestaurantId,
        table_id: TableId,
    ) -> Result<SessionId, SessionError> {
        debug!("Sending request");
        self.inner
            .create(SessionOpen {
                restaurant_id,
                table_id,
            })
            .await
            .map_err(Self::map_error)
    }

    /// Ends the session and frees the table. Refused while an order is being placed.
    #[instrument(skip(self))]
    pub async fn close_session(&self, id: SessionId) -> Result<(), SessionError> {
        self.delete(id).await
    }

    pub async fn session(&self, id: SessionId) -> Result<TableSession, SessionError> {
        self.get(id)
            .await?
            .ok_or_else(|| SessionError::NotFound(id.to_string()))
    }

    pub async fn cart(&self, id: SessionId) -> Result<Cart, SessionError> {
        Ok(self.session(id).await?.cart)
    }

    /// Current totals at the configured tax rate.
    pub async fn totals(&self, id: SessionId) -> Result<CartTotals, SessionError> {
        Ok(self.cart(id).await?.totals(self.tax_rate))
    }

    /// Looks the dish up on the session's menu and adds it, merging with an existing
    /// line. The diner is told `"2 x Grilled Salmon added to your order."`.
    #[instrument(skip(self))]
    pub async fn add_item(
        &self,
        id: SessionId,
        item_id: FoodId,
        quantity: u32,
    ) -> Result<CartLine, SessionError> {
        let session = self.session(id).await?;
        let food = self
            .catalog
            .item(session.restaurant_id, item_id)
            .await?
            .ok_or_else(|| SessionError::UnknownItem(item_id.to_string()))?;

        let quantity = quantity.max(1);
        let action = SessionAction::AddItem {
            item_id,
            name: food.name,
            unit_price: food.price,
            quantity,
        };
        let line = match self.act(id, action).await? {
            SessionActionResult::AddItem(line) => line,
            _ => unreachable!("AddItem action must return AddItem result"),
        };

        self.notifier.notify(Notification::ItemAdded {
            table_id: session.table_id,
            name: line.name.clone(),
            quantity,
        });
        Ok(line)
    }

    /// Removes the dish's line. Returns `false` if it was not in the cart.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: SessionId, item_id: FoodId) -> Result<bool, SessionError> {
        let removed = match self.act(id, SessionAction::RemoveItem(item_id)).await? {
            SessionActionResult::RemoveItem(removed) => removed,
            _ => unreachable!("RemoveItem action must return RemoveItem result"),
        };
        let Some(line) = removed else {
            return Ok(false);
        };

        let table_id = self.session(id).await?.table_id;
        self.notifier.notify(Notification::ItemRemoved {
            table_id,
            name: line.name,
        });
        Ok(true)
    }

    /// Sets a line's quantity, floored at one. `None` if the dish is not in the cart.
    #[instrument(skip(self))]
    pub async fn set_quantity(
        &self,
        id: SessionId,
        item_id: FoodId,
        quantity: i64,
    ) -> Result<Option<CartLine>, SessionError> {
        match self
            .act(id, SessionAction::SetQuantity { item_id, quantity })
            .await?
        {
            SessionActionResult::SetQuantity(line) => Ok(line),
            _ => unreachable!("SetQuantity action must return SetQuantity result"),
        }
    }

    #[instrument(skip(self))]
    pub async fn clear_cart(&self, id: SessionId) -> Result<(), SessionError> {
        match self.act(id, SessionAction::Clear).await? {
            SessionActionResult::Clear(()) => Ok(()),
            _ => unreachable!("Clear action must return Clear result"),
        }
    }

    /// Places the cart's order with `sink`.
    ///
    /// The cart is locked for the duration. On success it is emptied and the receipt is
    /// returned. On failure it is kept and the error is returned; call again to retry.
    /// If `cancel` fires first the sink call is dropped, the cart unlocks unchanged and
    /// [`SessionError::Cancelled`] is returned. Dropping the returned future mid-submit
    /// unlocks the cart the same way.
    #[instrument(skip(self, sink, cancel))]
    pub async fn place_order(
        &self,
        id: SessionId,
        sink: &dyn OrderSink,
        cancel: Option<&CancellationToken>,
    ) -> Result<OrderReceipt, SessionError> {
        let draft = match self.act(id, SessionAction::BeginSubmit(self.tax_rate)).await? {
            SessionActionResult::BeginSubmit(draft) => draft,
            _ => unreachable!("BeginSubmit action must return BeginSubmit result"),
        };
        let in_flight = InFlightSubmit::arm(self.inner.clone(), id);
        let table_id = draft.table_id;
        info!(%table_id, lines = draft.lines.len(), total = %draft.totals.total, "Submitting order");

        let submitted = match cancel {
            Some(token) => tokio::select! {
                result = sink.submit(draft) => Some(result),
                _ = token.cancelled() => None,
            },
            None => Some(sink.submit(draft).await),
        };

        let outcome = match &submitted {
            Some(Ok(receipt)) => SubmitOutcome::Placed(receipt.clone()),
            Some(Err(e)) => SubmitOutcome::Failed(e.to_string()),
            None => SubmitOutcome::Cancelled,
        };
        let phase = match self.act(id, SessionAction::CompleteSubmit(outcome)).await? {
            SessionActionResult::CompleteSubmit(phase) => phase,
            _ => unreachable!("CompleteSubmit action must return CompleteSubmit result"),
        };
        in_flight.defuse();
        debug!(%phase, "Checkout settled");

        match submitted {
            Some(Ok(receipt)) => {
                self.notifier.notify(Notification::OrderPlaced {
                    table_id,
                    order_id: receipt.order_id,
                    total: receipt.totals.total,
                });
                Ok(receipt)
            }
            Some(Err(e)) => {
                warn!(error = %e, "Order failed");
                self.notifier.notify(Notification::OrderFailed {
                    table_id,
                    reason: e.to_string(),
                });
                Err(e.into())
            }
            None => Err(SessionError::Cancelled),
        }
    }

    /// The session's phase, for screens that grey out the submit button.
    pub async fn phase(&self, id: SessionId) -> Result<SessionPhase, SessionError> {
        Ok(self.session(id).await?.phase)
    }

    async fn act(
        &self,
        id: SessionId,
        action: SessionAction,
    ) -> Result<SessionActionResult, SessionError> {
        debug!(?action, "Sending action");
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

/// Settles a checkout as cancelled if `place_order` is dropped between `BeginSubmit`
/// and `CompleteSubmit`, so the session does not stay `Submitting`.
struct InFlightSubmit {
    inner: Option<ResourceClient<TableSession>>,
    id: SessionId,
}

impl InFlightSubmit {
    fn arm(inner: ResourceClient<TableSession>, id: SessionId) -> Self {
        Self {
            inner: Some(inner),
            id,
        }
    }

    fn defuse(mut self) {
        self.inner = None;
    }
}

impl Drop for InFlightSubmit {
    fn drop(&mut self) {
        let Some(inner) = self.inner.take() else {
            return;
        };
        let id = self.id;
        let Ok(runtime) = Handle::try_current() else {
            warn!(session = %id, "Checkout abandoned outside a runtime, session stays locked");
            return;
        };
        warn!(session = %id, "Checkout abandoned, unlocking the cart");
        runtime.spawn(async move {
            let outcome = SessionAction::CompleteSubmit(SubmitOutcome::Cancelled);
            // Already settled if the future was dropped after CompleteSubmit was sent.
            if let Err(e) = inner.perform_action(id, outcome).await {
                debug!(session = %id, error = %e, "Abandoned checkout already settled");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CategoryId, Food, Money};
    use crate::ports::{ChannelNotifier, StaticMenu};
    use actor_framework::mock::MockClient;

    fn menu() -> Arc<StaticMenu> {
        Arc::new(StaticMenu::new(vec![Food {
            id: FoodId(4),
            restaurant_id: RestaurantId(1),
            category_id: CategoryId(2),
            name: "Grilled Salmon".into(),
            description: "Fresh Atlantic salmon".into(),
            price: Money::from_minor(2499),
            image: "salmon.jpg".into(),
        }]))
    }

    fn open_session() -> TableSession {
        TableSession::new(SessionId(1), RestaurantId(1), TableId(5))
    }

    #[tokio::test]
    async fn add_item_captures_catalog_values_and_notifies() {
        let mut mock = MockClient::<TableSession>::new();
        let line = CartLine {
            item_id: FoodId(4),
            name: "Grilled Salmon".into(),
            unit_price: Money::from_minor(2499),
            quantity: 2,
        };
        mock.expect_get(SessionId(1)).return_ok(Some(open_session()));
        mock.expect_action(SessionId(1))
            .return_ok(SessionActionResult::AddItem(line.clone()));

        let (notifier, mut notes) = ChannelNotifier::new(8);
        let sessions = SessionClient::new(
            mock.client(),
            menu(),
            Arc::new(notifier),
            TaxRate::default(),
        );

        let added = sessions.add_item(SessionId(1), FoodId(4), 2).await.unwrap();
        assert_eq!(added, line);

        let note = notes.recv().await.unwrap();
        assert_eq!(note.message(), "2 x Grilled Salmon added to your order.");
        assert_eq!(note.table_id(), TableId(5));
        mock.verify();
    }

    #[tokio::test]
    async fn unknown_items_are_rejected_before_the_cart() {
        let mut mock = MockClient::<TableSession>::new();
        mock.expect_get(SessionId(1)).return_ok(Some(open_session()));

        let (notifier, mut notes) = ChannelNotifier::new(8);
        let sessions = SessionClient::new(
            mock.client(),
            menu(),
            Arc::new(notifier),
            TaxRate::default(),
        );

        let err = sessions.add_item(SessionId(1), FoodId(99), 1).await.unwrap_err();
        assert_eq!(err, SessionError::UnknownItem("food_99".into()));
        assert!(notes.try_recv().is_err());
        mock.verify();
    }

    #[tokio::test]
    async fn entity_errors_come_back_typed() {
        let mut mock = MockClient::<TableSession>::new();
        mock.expect_action(SessionId(1))
            .return_err(FrameworkError::EntityError(Box::new(
                SessionError::SubmissionInFlight,
            )));

        let (notifier, _notes) = ChannelNotifier::new(8);
        let sessions = SessionClient::new(
            mock.client(),
            menu(),
            Arc::new(notifier),
            TaxRate::default(),
        );

        let err = sessions.clear_cart(SessionId(1)).await.unwrap_err();
        assert_eq!(err, SessionError::SubmissionInFlight);
        mock.verify();
    }

    #[tokio::test]
    async fn dropped_submit_is_settled_as_cancelled() {
        let mut mock = MockClient::<TableSession>::new();
        mock.expect_action(SessionId(1))
            .return_ok(SessionActionResult::CompleteSubmit(SessionPhase::Building));

        let in_flight = InFlightSubmit::arm(mock.client(), SessionId(1));
        drop(in_flight);
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        mock.verify();
    }
}
