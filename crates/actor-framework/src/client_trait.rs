//! # ActorClient Trait
//!
//! Shared read/delete surface for resource-specific clients built on a `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard operations.
///
/// Implementors supply the inner `ResourceClient` and an error mapping; `get`, `list`
/// and `delete` come for free and report the resource's own error type.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Table { id: u32, seats: u32 }
/// #[derive(Debug)] struct TableCreate { seats: u32 }
/// #[derive(Debug)] struct TableUpdate;
/// #[derive(Debug)] enum TableAction {}
///
/// #[derive(Debug, thiserror::Error)]
/// enum TableError {
///     #[error("Table not found: {0}")]
///     NotFound(String),
///     #[error("Actor communication error: {0}")]
///     ActorCommunicationError(String),
/// }
/// impl From<String> for TableError {
///     fn from(msg: String) -> Self { TableError::ActorCommunicationError(msg) }
/// }
///
/// #[async_trait]
/// impl ActorEntity for Table {
///     type Id = u32; type Create = TableCreate; type Update = TableUpdate;
///     type Action = TableAction; type ActionResult = (); type Context = ();
///     type Error = TableError;
///     fn from_create_params(id: u32, p: TableCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, seats: p.seats })
///     }
///     async fn on_update(&mut self, _: TableUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: TableAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct TableClient { inner: ResourceClient<Table> }
///
/// #[async_trait]
/// impl ActorClient<Table> for TableClient {
///     type Error = TableError;
///     fn inner(&self) -> &ResourceClient<Table> { &self.inner }
///     fn map_error(e: FrameworkError) -> Self::Error {
///         match e {
///             FrameworkError::NotFound(id) => TableError::NotFound(id),
///             other => TableError::ActorCommunicationError(other.to_string()),
///         }
///     }
/// }
///
/// async fn usage(client: TableClient) {
///     // get(), list() and delete() are provided.
///     let _ = client.get(1).await;
///     let _ = client.list().await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity in creation order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
