//! Error types for the Session actor.

use crate::ports::{CatalogError, SubmissionError};
use crate::table_actor::TableError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(String),

    #[error("Cart is empty")]
    EmptyCart,

    /// The cart is locked while its order is being placed.
    #[error("An order is already being placed for this table")]
    SubmissionInFlight,

    #[error("No order is being placed for this table")]
    NotSubmitting,

    #[error("Order placement was cancelled")]
    Cancelled,

    #[error("Menu item {0} is not on this restaurant's menu")]
    UnknownItem(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Submission(#[from] SubmissionError),

    #[error(transparent)]
    Table(#[from] TableError),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for SessionError {
    fn from(msg: String) -> Self {
        SessionError::ActorCommunicationError(msg)
    }
}
