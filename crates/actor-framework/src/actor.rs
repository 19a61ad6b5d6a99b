//! # Generic Actor Server
//!
//! `ResourceActor` owns the entities of one resource type and answers requests one at a
//! time on its own task. Sequential processing is the whole concurrency story: a table's
//! ordering session has exactly one mutator, so no lock guards its cart.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// The store keeps insertion order: `List` returns tables, dishes and categories in the
/// order they were created, which is the order the admin screens show them in.
///
/// # Usage Pattern
///
/// 1. **Create**: `ResourceActor::new()` returns the actor (server) and a client.
/// 2. **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3. **Run**: spawn the run loop on a Tokio task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Category { id: u32, name: String }
/// #[derive(Debug)] struct CategoryCreate { name: String }
/// #[derive(Debug)] struct CategoryUpdate;
/// #[derive(Debug)] enum CategoryAction {}
/// #[derive(Debug, thiserror::Error)] #[error("category error")] struct CategoryError;
///
/// #[async_trait]
/// impl ActorEntity for Category {
///     type Id = u32;
///     type Create = CategoryCreate;
///     type Update = CategoryUpdate;
///     type Action = CategoryAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = CategoryError;
///
///     fn from_create_params(id: u32, p: CategoryCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, name: p.name })
///     }
///     async fn on_update(&mut self, _: CategoryUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: CategoryAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Category>::new(10);
///     tokio::spawn(actor.run(()));
///
///     client.create(CategoryCreate { name: "Desserts".into() }).await.unwrap();
///     let all = client.list().await.unwrap();
///     assert_eq!(all[0].name, "Desserts");
/// }
/// ```
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the mpsc capacity; when full, client calls wait for space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    ///
    /// `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = entity_type::<T>();
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    self.create(entity_type, params, respond_to, &context).await;
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self
                        .order
                        .iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    debug!(entity_type, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    self.update(entity_type, id, update, respond_to, &context)
                        .await;
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    self.delete(entity_type, id, respond_to, &context).await;
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    self.action(entity_type, id, action, respond_to, &context)
                        .await;
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        entity_type: &str,
        params: T::Create,
        respond_to: Response<T::Id>,
        context: &T::Context,
    ) {
        let id = T::Id::from(self.next_id);
        self.next_id += 1;

        let mut item = match T::from_create_params(id.clone(), params) {
            Ok(item) => item,
            Err(e) => {
                warn!(entity_type, error = %e, "Rejected create params");
                return refuse(respond_to, e);
            }
        };
        if let Err(e) = item.on_create(context).await {
            warn!(entity_type, %id, error = %e, "Rejected by on_create");
            return refuse(respond_to, e);
        }

        self.store.insert(id.clone(), item);
        self.order.push(id.clone());
        info!(entity_type, %id, size = self.store.len(), "Created");
        let _ = respond_to.send(Ok(id));
    }

    async fn update(
        &mut self,
        entity_type: &str,
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
        context: &T::Context,
    ) {
        let Some(item) = self.store.get_mut(&id) else {
            return missing(entity_type, &id, respond_to);
        };
        // Hooks mutate in place, so a failed update must not leak partial edits.
        let mut draft = item.clone();
        match draft.on_update(update, context).await {
            Ok(()) => {
                *item = draft;
                info!(entity_type, %id, "Updated");
                let _ = respond_to.send(Ok(item.clone()));
            }
            Err(e) => {
                warn!(entity_type, %id, error = %e, "Update rejected, entity unchanged");
                refuse(respond_to, e);
            }
        }
    }

    async fn delete(
        &mut self,
        entity_type: &str,
        id: T::Id,
        respond_to: Response<()>,
        context: &T::Context,
    ) {
        let Some(item) = self.store.get(&id) else {
            return missing(entity_type, &id, respond_to);
        };
        if let Err(e) = item.on_delete(context).await {
            warn!(entity_type, %id, error = %e, "Delete vetoed by on_delete");
            return refuse(respond_to, e);
        }
        self.store.remove(&id);
        self.order.retain(|kept| kept != &id);
        info!(entity_type, %id, size = self.store.len(), "Deleted");
        let _ = respond_to.send(Ok(()));
    }

    async fn action(
        &mut self,
        entity_type: &str,
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
        context: &T::Context,
    ) {
        let Some(item) = self.store.get_mut(&id) else {
            return missing(entity_type, &id, respond_to);
        };
        match item.handle_action(action, context).await {
            Ok(result) => {
                debug!(entity_type, %id, ?result, "Action applied");
                let _ = respond_to.send(Ok(result));
            }
            Err(e) => {
                warn!(entity_type, %id, error = %e, "Action rejected");
                refuse(respond_to, e);
            }
        }
    }
}

fn refuse<R, E>(respond_to: Response<R>, error: E)
where
    E: std::error::Error + Send + Sync + 'static,
{
    let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(error))));
}

fn missing<R>(entity_type: &str, id: &impl std::fmt::Display, respond_to: Response<R>) {
    warn!(entity_type, %id, "No such entity");
    let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
}

// "table_order::model::table::DiningTable" -> "DiningTable"
fn entity_type<T>() -> &'static str {
    std::any::type_name::<T>()
        .split("::")
        .last()
        .unwrap_or("Unknown")
}
