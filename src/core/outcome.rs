//! Batch outcome reporting

use crate::core::processors::UNASSIGNED_OWNER;
use crate::domain::{Order, OrderPriority, OrderStatus, OwnerId};
use std::collections::BTreeMap;
use std::time::Duration;

/// Result of processing one owner's batch
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// Owner the batch was fetched for
    pub owner_id: Option<OwnerId>,

    /// True if every order went through its type and priority steps
    pub succeeded: bool,

    /// True if the orders could not be fetched, in which case nothing ran
    pub fetch_failed: bool,

    /// Number of leading orders that went through every step
    pub processed: usize,

    /// Orders as they stood when the batch ended
    pub orders: Vec<Order>,

    /// Wall-clock time of the batch
    pub duration: Duration,
}

impl BatchOutcome {
    /// Outcome of a batch whose fetch failed
    pub fn fetch_failure(owner_id: Option<OwnerId>, duration: Duration) -> Self {
        Self {
            owner_id,
            succeeded: false,
            fetch_failed: true,
            processed: 0,
            orders: Vec::new(),
            duration,
        }
    }

    /// Number of orders per status, including orders left untouched
    pub fn status_counts(&self) -> BTreeMap<OrderStatus, usize> {
        let mut counts = BTreeMap::new();
        for order in &self.orders {
            *counts.entry(order.status()).or_insert(0) += 1;
        }
        counts
    }

    pub fn high_priority_count(&self) -> usize {
        self.orders
            .iter()
            .filter(|o| o.priority() == OrderPriority::High)
            .count()
    }

    /// Orders left unprocessed because the batch aborted, including the
    /// order it aborted on
    pub fn untouched_count(&self) -> usize {
        self.orders.len().saturating_sub(self.processed)
    }

    /// Log the outcome
    pub fn log_summary(&self) {
        let owner = self
            .owner_id
            .map_or_else(|| UNASSIGNED_OWNER.to_string(), |id| id.to_string());

        if self.fetch_failed {
            tracing::warn!(owner_id = %owner, "Batch skipped: orders could not be fetched");
            return;
        }

        crate::log_batch_complete!(owner, self.orders.len(), self.succeeded, self.duration);

        for (status, count) in self.status_counts() {
            tracing::info!(owner_id = %owner, status = %status, count, "Status count");
        }

        if !self.succeeded {
            tracing::warn!(
                owner_id = %owner,
                untouched = self.untouched_count(),
                "Batch aborted before all orders were processed"
            );
        }
    }
}
