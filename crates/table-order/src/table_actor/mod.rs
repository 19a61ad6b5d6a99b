//! # Table Actor
//!
//! Owns the dining tables of every restaurant and their occupancy status.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`DiningTable`]
//! - [`error`] - [`TableError`]
//! - [`actions`] - [`TableAction`] / [`TableActionResult`] for occupancy changes
//!
//! ## Occupancy
//!
//! An ordering session occupies its table when it opens and releases it when it closes.
//! Both go through [`TableAction`], so the check-and-set is a single step inside the
//! actor and two diners can never claim the same table:
//!
//! ```rust,ignore
//! tables.occupy(table_id, restaurant_id).await?; // Available -> Occupied
//! tables.release(table_id).await?;               // -> Available
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::DiningTable;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Table actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<DiningTable>, ResourceClient<DiningTable>) {
    ResourceActor::new(buffer_size)
}
