use crate::cart::{Cart, CartLine, CartTotals};
use crate::model::{OrderId, RestaurantId, TableId};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

entity_id!(
    /// Type-safe identifier for ordering sessions.
    SessionId,
    "session"
);

/// Where a table's ordering session is in its checkout cycle.
///
/// ```text
/// Empty --add--> Building --submit--> Submitting --+--> Submitted (cart cleared)
///   ^              |  ^                 |          +--> Failed (cart kept)
///   +--remove last-+  +----cancelled----+
/// ```
///
/// `Submitted` and `Failed` behave like `Empty` and `Building` for the next edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionPhase {
    Empty,
    Building,
    Submitting,
    Submitted,
    Failed,
}

impl Display for SessionPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// A diner's open ordering session at one table.
///
/// # Actor Framework
/// Implements [`ActorEntity`](actor_framework::ActorEntity) in
/// [`session_actor`](crate::session_actor); the cart is only reachable through
/// [`SessionAction`](crate::session_actor::SessionAction)s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSession {
    pub id: SessionId,
    pub restaurant_id: RestaurantId,
    pub table_id: TableId,
    pub cart: Cart,
    pub phase: SessionPhase,
    pub last_failure: Option<String>,
    pub rounds_submitted: u32,
}

impl TableSession {
    pub fn new(id: SessionId, restaurant_id: RestaurantId, table_id: TableId) -> Self {
        Self {
            id,
            restaurant_id,
            table_id,
            cart: Cart::new(),
            phase: SessionPhase::Empty,
            last_failure: None,
            rounds_submitted: 0,
        }
    }
}

/// Payload for opening a session at a table.
#[derive(Debug, Clone)]
pub struct SessionOpen {
    pub restaurant_id: RestaurantId,
    pub table_id: TableId,
}

/// The frozen cart handed to the order sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub session_id: SessionId,
    pub restaurant_id: RestaurantId,
    pub table_id: TableId,
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

/// What the sink returns for an accepted order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: OrderId,
    pub table_id: TableId,
    pub totals: CartTotals,
}
