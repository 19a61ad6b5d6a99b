//! # System Lifecycle
//!
//! Spawns the six actors, wires their contexts and tears them down again.
//!
//! ## Wiring
//!
//! ```text
//! restaurants   ()
//! categories    ()
//! tables        ()
//! orders        ()
//! foods         CategoryClient      dishes must name an existing category
//! sessions      TableClient         opening/closing a session occupies/releases the table
//! ```
//!
//! Actors are created first and given their context when spawned, so construction order
//! does not matter. The graph is acyclic: once every client held by
//! [`TableOrderSystem`] is dropped, the session and food actors exit and drop the table
//! and category clients they hold, and the rest follow.
//!
//! ## Shutdown
//!
//! [`TableOrderSystem::shutdown`] drops the system's clients and awaits every actor task.
//! Clones handed out earlier keep their actor alive, including the
//! [`OrderBookSink`](crate::ports::OrderBookSink) returned by
//! [`TableOrderSystem::order_sink`]; drop those first or shutdown waits for them.
//!
//! Tracing is set up with [`actor_framework::tracing::setup_tracing`]; every actor logs
//! its requests under its own span.

pub mod table_order_system;

pub use table_order_system::*;
