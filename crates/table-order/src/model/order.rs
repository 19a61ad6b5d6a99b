use crate::cart::{CartLine, CartTotals};
use crate::model::{RestaurantId, SessionId, TableId};
use serde::{Deserialize, Serialize};

entity_id!(
    /// Type-safe identifier for placed orders.
    OrderId,
    "order"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Received,
}

/// A placed order as recorded by the order book. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderTicket {
    pub id: OrderId,
    pub session_id: SessionId,
    pub restaurant_id: RestaurantId,
    pub table_id: TableId,
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
    pub status: OrderStatus,
}
