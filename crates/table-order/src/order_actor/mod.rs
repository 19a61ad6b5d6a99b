//! # Order Actor
//!
//! The order book: one [`OrderTicket`] per successful checkout. Tickets are written by
//! [`OrderBookSink`](crate::ports::OrderBookSink) and read by the dashboard.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::OrderTicket;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<OrderTicket>, ResourceClient<OrderTicket>) {
    ResourceActor::new(buffer_size)
}
