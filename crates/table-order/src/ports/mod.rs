//! # Ports
//!
//! The collaborators the ordering flow talks to, as traits with in-memory
//! implementations:
//!
//! | Port | Trait | Provided |
//! |---|---|---|
//! | Menu lookup | [`MenuCatalog`] | [`FoodClient`](crate::clients::FoodClient), [`StaticMenu`] |
//! | Order submission | [`OrderSink`] | [`OrderBookSink`] |
//! | Diner feedback | [`Notifier`] | [`TracingNotifier`], [`ChannelNotifier`] |
//!
//! A `tokio_util` `CancellationToken` lets a caller abandon a checkout that is waiting
//! on the sink.

pub mod catalog;
pub mod notify;
pub mod sink;

pub use catalog::*;
pub use notify::*;
pub use sink::*;
