//! Error types for the Table actor.

use crate::model::{TableStatus, ValidationErrors};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum TableError {
    #[error("Table not found: {0}")]
    NotFound(String),

    #[error("Invalid table: {0}")]
    Validation(ValidationErrors),

    /// Table #`number` cannot be claimed in its current state.
    #[error("Table #{number} is {status}")]
    NotAvailable { number: u32, status: TableStatus },

    #[error("Table {table} does not belong to {restaurant}")]
    WrongRestaurant { table: String, restaurant: String },

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for TableError {
    fn from(msg: String) -> Self {
        TableError::ActorCommunicationError(msg)
    }
}
