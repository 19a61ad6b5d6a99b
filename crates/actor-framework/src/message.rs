//! # Requests
//!
//! What a [`ResourceClient`](crate::ResourceClient) sends to its actor. Each request
//! carries a oneshot [`Response`] that the actor answers exactly once; if the actor
//! drops it instead, the client sees [`FrameworkError::ActorDropped`].

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Where the actor sends the outcome of one request.
pub type Response<R> = oneshot::Sender<Result<R, FrameworkError>>;

/// One operation on a resource.
///
/// `List` returns entities in insertion order. `Action` carries the resource's own
/// operations, such as occupying a table or adding a dish to a cart.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

impl<T: ActorEntity> ResourceRequest<T> {
    /// The entity the request targets. `Create` and `List` have none.
    pub fn target(&self) -> Option<&T::Id> {
        match self {
            ResourceRequest::Create { .. } | ResourceRequest::List { .. } => None,
            ResourceRequest::Get { id, .. }
            | ResourceRequest::Update { id, .. }
            | ResourceRequest::Delete { id, .. }
            | ResourceRequest::Action { id, .. } => Some(id),
        }
    }

    /// Short form for logs and test failures, e.g. `Action(table_3)`.
    pub fn label(&self) -> String {
        let name = match self {
            ResourceRequest::Create { .. } => "Create",
            ResourceRequest::Get { .. } => "Get",
            ResourceRequest::List { .. } => "List",
            ResourceRequest::Update { .. } => "Update",
            ResourceRequest::Delete { .. } => "Delete",
            ResourceRequest::Action { .. } => "Action",
        };
        match self.target() {
            Some(id) => format!("{name}({id})"),
            None => name.to_string(),
        }
    }
}
