//! # Food Actor
//!
//! The menu items of every restaurant.
//!
//! ## Dependencies
//!
//! Runs with a [`CategoryClient`](crate::clients::CategoryClient) as context: a dish can
//! only be filed under a category that exists, checked on create and whenever an update
//! moves the dish.
//!
//! ```rust,ignore
//! let (food_actor, foods) = food_actor::new(32);
//! tokio::spawn(food_actor.run(category_client.clone()));
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Food;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Food actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Food>, ResourceClient<Food>) {
    ResourceActor::new(buffer_size)
}
