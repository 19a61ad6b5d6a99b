//! Cart edits and checkout steps for an ordering session.

use crate::cart::CartLine;
use crate::model::{FoodId, Money, OrderDraft, OrderReceipt, SessionPhase, TaxRate};

#[derive(Debug, Clone)]
pub enum SessionAction {
    /// Adds or merges a dish. Name and price are the catalog values at add time.
    AddItem {
        item_id: FoodId,
        name: String,
        unit_price: Money,
        quantity: u32,
    },
    RemoveItem(FoodId),
    /// Sets a line's quantity; values below one are floored at one.
    SetQuantity { item_id: FoodId, quantity: i64 },
    /// Empties the cart without placing an order.
    Clear,
    /// Freezes the cart into a draft and enters `Submitting`.
    ///
    /// # Errors
    /// `EmptyCart` when there is nothing to order, `SubmissionInFlight` when a
    /// checkout is already running.
    BeginSubmit(TaxRate),
    /// Reports how the order sink call ended.
    CompleteSubmit(SubmitOutcome),
}

/// How a checkout that reached the order sink ended.
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    Placed(OrderReceipt),
    Failed(String),
    Cancelled,
}

/// Results from SessionActions - variants match 1:1 with SessionAction
#[derive(Debug, Clone)]
pub enum SessionActionResult {
    /// The line after the merge.
    AddItem(CartLine),
    /// The removed line, if the dish was in the cart.
    RemoveItem(Option<CartLine>),
    SetQuantity(Option<CartLine>),
    Clear(()),
    BeginSubmit(OrderDraft),
    /// The phase the session settled in.
    CompleteSubmit(SessionPhase),
}
