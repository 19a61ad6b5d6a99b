//! Error types for the Food actor.

use crate::model::ValidationErrors;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FoodError {
    #[error("Food item not found: {0}")]
    NotFound(String),

    #[error("Invalid food item: {0}")]
    Validation(ValidationErrors),

    #[error("Category does not exist: {0}")]
    UnknownCategory(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for FoodError {
    fn from(msg: String) -> Self {
        FoodError::ActorCommunicationError(msg)
    }
}
