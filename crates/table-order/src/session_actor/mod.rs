//! # Session Actor
//!
//! One [`TableSession`] per seated party. The session owns the party's
//! [`Cart`](crate::cart::Cart) and walks the checkout cycle described on
//! [`SessionPhase`](crate::model::SessionPhase).
//!
//! ## Why an actor
//!
//! All edits to a cart arrive as [`SessionAction`]s and are applied one at a time, so a
//! late "add" can never interleave with a checkout: while the phase is `Submitting`
//! every edit is answered with [`SessionError::SubmissionInFlight`].
//!
//! Checkout is split in two actions so the slow order sink call happens outside the
//! actor:
//!
//! ```text
//! BeginSubmit(tax)        Building -> Submitting, returns the OrderDraft
//!   ... sink.submit(draft) runs in the caller, racing the cancel signal ...
//! CompleteSubmit(outcome) Submitting -> Submitted | Failed | Building
//! ```
//!
//! ## Dependencies
//!
//! Context is the [`TableClient`](crate::clients::TableClient): opening a session
//! occupies the table and closing it releases the table.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::TableSession;
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Session actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<TableSession>, ResourceClient<TableSession>) {
    ResourceActor::new(buffer_size)
}
