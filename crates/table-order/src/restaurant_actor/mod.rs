//! # Restaurant Actor
//!
//! The searchable restaurant directory. Seeded from fixtures; restaurants are not
//! edited at runtime.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Restaurant;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Restaurant actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Restaurant>, ResourceClient<Restaurant>) {
    ResourceActor::new(buffer_size)
}
