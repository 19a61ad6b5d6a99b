use crate::model::{RestaurantId, ValidationErrors};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

entity_id!(
    /// Type-safe identifier for dining tables.
    TableId,
    "table"
);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStatus {
    Available,
    Occupied,
    Reserved,
}

impl Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TableStatus::Available => "available",
            TableStatus::Occupied => "occupied",
            TableStatus::Reserved => "reserved",
        })
    }
}

/// A physical table in a restaurant.
///
/// `number` is what is printed on the table and is unique per restaurant; `id` is the
/// actor's key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiningTable {
    pub id: TableId,
    pub restaurant_id: RestaurantId,
    pub number: u32,
    pub seats: u32,
    pub status: TableStatus,
}

/// Payload for adding a table. New tables start `Available`.
#[derive(Debug, Clone)]
pub struct TableCreate {
    pub restaurant_id: RestaurantId,
    pub number: u32,
    pub seats: u32,
}

impl TableCreate {
    /// Form checks that need no other table. Number uniqueness is checked by
    /// [`TableClient::add_table`](crate::clients::TableClient::add_table).
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.number == 0 {
            errors.add("number", "Table number is required");
        }
        if self.seats == 0 {
            errors.add("seats", "Number of seats must be greater than 0");
        }
        errors.into_result()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TableUpdate {
    pub seats: Option<u32>,
}
