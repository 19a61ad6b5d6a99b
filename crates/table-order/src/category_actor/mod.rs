//! # Category Actor
//!
//! Menu categories (Appetizers, Main Courses, ...). Categories are shared by every
//! restaurant's menu. Item counts are derived from the foods on demand, see
//! [`summarize_categories`](crate::model::summarize_categories).

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Category;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Category actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Category>, ResourceClient<Category>) {
    ResourceActor::new(buffer_size)
}
