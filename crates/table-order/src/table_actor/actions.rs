//! Occupancy actions for dining tables.

use crate::model::{RestaurantId, TableStatus};

#[derive(Debug, Clone)]
pub enum TableAction {
    /// Claims an `Available` table for a session of `restaurant_id`.
    ///
    /// # Errors
    /// Fails if the table is occupied or reserved, or belongs to another restaurant.
    Occupy { restaurant_id: RestaurantId },
    /// Returns the table to `Available`. Releasing a free table is a no-op.
    Release,
    /// Admin override of the status.
    SetStatus(TableStatus),
}

/// Results from TableActions - variants match 1:1 with TableAction
#[derive(Debug, Clone)]
pub enum TableActionResult {
    Occupy(()),
    Release(()),
    /// The status before the change.
    SetStatus(TableStatus),
}
