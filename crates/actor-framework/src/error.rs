//! # Framework Errors
//!
//! Transport-level failures plus a boxed slot for whatever the entity hook reported.

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the concrete entity error carried by [`FrameworkError::EntityError`].
    ///
    /// Anything else, including an entity error of a different type, is handed back
    /// unchanged so the caller can map it to its communication-error variant.
    pub fn downcast_entity<E>(self) -> Result<E, FrameworkError>
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => match inner.downcast::<E>() {
                Ok(err) => Ok(*err),
                Err(other) => Err(FrameworkError::EntityError(other)),
            },
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("table taken")]
    struct TableTaken;

    #[derive(Debug, thiserror::Error)]
    #[error("other")]
    struct Other;

    #[test]
    fn downcast_recovers_matching_entity_error() {
        let err = FrameworkError::EntityError(Box::new(TableTaken));
        assert_eq!(err.downcast_entity::<TableTaken>().unwrap(), TableTaken);
    }

    #[test]
    fn downcast_returns_mismatches_untouched() {
        let err = FrameworkError::EntityError(Box::new(Other));
        let back = err.downcast_entity::<TableTaken>().unwrap_err();
        assert_eq!(back.to_string(), "Entity error: other");

        let closed = FrameworkError::ActorClosed.downcast_entity::<TableTaken>();
        assert!(matches!(closed, Err(FrameworkError::ActorClosed)));
    }
}
