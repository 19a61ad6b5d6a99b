//! # Actor Framework
//!
//! Resource-oriented actors on Tokio: each resource type (dining tables, menu items,
//! ordering sessions, ...) lives in its own [`ResourceActor`], which owns the entities
//! and serves CRUD + List + Action requests one at a time.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): the business rules of one resource, written as
//!    plain hooks (`from_create_params`, `on_create`, `on_update`, `on_delete`,
//!    `handle_action`).
//! 2. **Runtime** ([`ResourceActor`]): the message loop, id assignment and the
//!    insertion-ordered store.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): cloneable, typed handles.
//!
//! ## Context Injection
//!
//! Dependencies reach an entity through `run(context)` instead of `new()`. Actors are
//! therefore built first and wired afterwards, and an entity can call other actors from
//! its hooks; an ordering session, for instance, occupies its table in `on_create`.
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor, ResourceClient};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Table { id: u32, free: bool }
//! #[derive(Debug)] struct TableCreate;
//! #[derive(Debug)] struct NoUpdate;
//! #[derive(Debug)] enum TableAction { Occupy }
//! #[derive(Debug, thiserror::Error)] #[error("table is taken")] struct Taken;
//!
//! #[async_trait]
//! impl ActorEntity for Table {
//!     type Id = u32; type Create = TableCreate; type Update = NoUpdate;
//!     type Action = TableAction; type ActionResult = (); type Context = (); type Error = Taken;
//!     fn from_create_params(id: u32, _: TableCreate) -> Result<Self, Taken> { Ok(Self { id, free: true }) }
//!     async fn on_update(&mut self, _: NoUpdate, _: &()) -> Result<(), Taken> { Ok(()) }
//!     async fn handle_action(&mut self, _: TableAction, _: &()) -> Result<(), Taken> {
//!         if !self.free { return Err(Taken); }
//!         self.free = false;
//!         Ok(())
//!     }
//! }
//!
//! #[derive(Clone, Debug)] struct Session { id: u32, table: u32 }
//! #[derive(Debug)] struct SessionCreate { table: u32 }
//!
//! #[async_trait]
//! impl ActorEntity for Session {
//!     type Id = u32; type Create = SessionCreate; type Update = NoUpdate;
//!     type Action = NoUpdate; type ActionResult = (); type Error = Taken;
//!     // The session actor talks to the table actor.
//!     type Context = ResourceClient<Table>;
//!
//!     fn from_create_params(id: u32, p: SessionCreate) -> Result<Self, Taken> {
//!         Ok(Self { id, table: p.table })
//!     }
//!     async fn on_create(&mut self, tables: &ResourceClient<Table>) -> Result<(), Taken> {
//!         tables.perform_action(self.table, TableAction::Occupy).await.map_err(|_| Taken)
//!     }
//!     async fn on_update(&mut self, _: NoUpdate, _: &Self::Context) -> Result<(), Taken> { Ok(()) }
//!     async fn handle_action(&mut self, _: NoUpdate, _: &Self::Context) -> Result<(), Taken> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (table_actor, tables) = ResourceActor::<Table>::new(10);
//!     let (session_actor, sessions) = ResourceActor::<Session>::new(10);
//!     tokio::spawn(table_actor.run(()));
//!     tokio::spawn(session_actor.run(tables.clone()));
//!
//!     let table = tables.create(TableCreate).await.unwrap();
//!     assert!(sessions.create(SessionCreate { table }).await.is_ok());
//!     // Second diner at the same table is turned away by the table actor.
//!     assert!(sessions.create(SessionCreate { table }).await.is_err());
//! }
//! ```
//!
//! ## Errors
//!
//! Each entity declares one error enum. It travels boxed inside
//! [`FrameworkError::EntityError`] and typed clients take it back out with
//! [`FrameworkError::downcast_entity`].
//!
//! ## Testing
//!
//! [`mock::MockClient`] scripts answers for client-logic tests; [`mock::create_mock_client`]
//! exposes the raw requests when a test needs to inspect payloads.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
