//! Fire-and-forget feedback for the diner (the toasts of the ordering screens).

use crate::model::{Money, OrderId, TableId};
use serde::Serialize;
use tokio::sync::mpsc;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    ItemAdded {
        table_id: TableId,
        name: String,
        quantity: u32,
    },
    ItemRemoved {
        table_id: TableId,
        name: String,
    },
    OrderPlaced {
        table_id: TableId,
        order_id: OrderId,
        total: Money,
    },
    OrderFailed {
        table_id: TableId,
        reason: String,
    },
}

impl Notification {
    pub fn table_id(&self) -> TableId {
        match self {
            Notification::ItemAdded { table_id, .. }
            | Notification::ItemRemoved { table_id, .. }
            | Notification::OrderPlaced { table_id, .. }
            | Notification::OrderFailed { table_id, .. } => *table_id,
        }
    }

    /// The text shown to the diner.
    pub fn message(&self) -> String {
        match self {
            Notification::ItemAdded { name, quantity, .. } => {
                format!("{quantity} x {name} added to your order.")
            }
            Notification::ItemRemoved { name, .. } => {
                format!("{name} has been removed from your cart.")
            }
            Notification::OrderPlaced { total, .. } => {
                format!("Your order has been placed. Total: {total}")
            }
            Notification::OrderFailed { reason, .. } => {
                format!("Your order could not be placed: {reason}. Your cart has been kept.")
            }
        }
    }
}

/// Receives notifications. Must not block; the caller never waits on delivery.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Writes each notification to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) {
        info!(table = %notification.table_id(), "{}", notification.message());
    }
}

/// Forwards notifications to a bounded channel. A full or closed channel drops the
/// notification.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    tx: mpsc::Sender<Notification>,
}

impl ChannelNotifier {
    pub fn new(buffer_size: usize) -> (Self, mpsc::Receiver<Notification>) {
        let (tx, rx) = mpsc::channel(buffer_size);
        (Self { tx }, rx)
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: Notification) {
        if let Err(e) = self.tx.try_send(notification) {
            debug!(error = %e, "Notification dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_added_reads_like_the_toast() {
        let n = Notification::ItemAdded {
            table_id: TableId(1),
            name: "Grilled Salmon".into(),
            quantity: 2,
        };
        assert_eq!(n.message(), "2 x Grilled Salmon added to your order.");
    }

    #[test]
    fn full_channel_drops_instead_of_blocking() {
        let (notifier, mut rx) = ChannelNotifier::new(1);
        for name in ["Bruschetta", "Craft Beer"] {
            notifier.notify(Notification::ItemRemoved {
                table_id: TableId(3),
                name: name.into(),
            });
        }
        let first = rx.try_recv().unwrap();
        assert_eq!(first.message(), "Bruschetta has been removed from your cart.");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn serializes_with_a_kind_tag() {
        let n = Notification::OrderPlaced {
            table_id: TableId(1),
            order_id: OrderId(7),
            total: Money::from_minor(6801),
        };
        let json = serde_json::to_value(&n).unwrap();
        assert_eq!(json["kind"], "order_placed");
        assert_eq!(json["order_id"], 7);
        assert_eq!(json["total"], "68.01");
    }
}
