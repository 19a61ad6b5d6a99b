//! Order submission.

use crate::clients::OrderClient;
use crate::model::{OrderDraft, OrderReceipt};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmissionError {
    #[error("Order rejected: {0}")]
    Rejected(String),

    #[error("Order service unavailable: {0}")]
    Unavailable(String),
}

/// Accepts a frozen cart and answers, possibly much later, with a receipt or a failure.
#[async_trait]
pub trait OrderSink: Send + Sync {
    async fn submit(&self, draft: OrderDraft) -> Result<OrderReceipt, SubmissionError>;
}

/// Records orders in the order actor after a fixed delay, standing in for a remote
/// order service.
#[derive(Clone)]
pub struct OrderBookSink {
    orders: OrderClient,
    delay: Duration,
    rejection: Option<String>,
}

impl OrderBookSink {
    pub fn new(orders: OrderClient, delay: Duration) -> Self {
        Self {
            orders,
            delay,
            rejection: None,
        }
    }

    /// A sink that waits the same delay and then rejects every order with `reason`.
    pub fn failing(orders: OrderClient, delay: Duration, reason: impl Into<String>) -> Self {
        Self {
            orders,
            delay,
            rejection: Some(reason.into()),
        }
    }
}

#[async_trait]
impl OrderSink for OrderBookSink {
    #[instrument(skip_all, fields(table = %draft.table_id, lines = draft.lines.len()))]
    async fn submit(&self, draft: OrderDraft) -> Result<OrderReceipt, SubmissionError> {
        tokio::time::sleep(self.delay).await;

        if let Some(reason) = &self.rejection {
            warn!(%reason, "Order rejected");
            return Err(SubmissionError::Rejected(reason.clone()));
        }

        let table_id = draft.table_id;
        let totals = draft.totals;
        let order_id = self
            .orders
            .record(draft)
            .await
            .map_err(|e| SubmissionError::Unavailable(e.to_string()))?;

        info!(order = %order_id, total = %totals.total, "Order recorded");
        Ok(OrderReceipt {
            order_id,
            table_id,
            totals,
        })
    }
}
