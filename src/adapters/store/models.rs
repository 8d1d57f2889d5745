//! Persisted order record
//!
//! The record keeps every field as a primitive so that the file and
//! PostgreSQL backends share one mapping to and from [`Order`].

use crate::domain::{
    Order, OrderFlowError, OrderId, OrderPriority, OrderStatus, OrderType, OwnerId, Result,
    StorageError,
};
use serde::{Deserialize, Serialize};

/// An order as stored by a backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: i64,
    pub owner_id: i64,
    pub order_type: String,
    pub amount: f64,
    #[serde(default)]
    pub is_special: bool,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "default_priority")]
    pub priority: String,
}

impl OrderRecord {
    /// Builds a record from an order and its owner
    pub fn from_order(order: &Order, owner_id: OwnerId) -> Self {
        Self {
            id: order.id().value(),
            owner_id: owner_id.value(),
            order_type: order.order_type().to_string(),
            amount: order.amount(),
            is_special: order.is_special(),
            status: order.status().to_string(),
            priority: order.priority().to_string(),
        }
    }

    /// Maps the record to a domain order
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidRecord`] if the status, priority or
    /// amount is not valid.
    pub fn into_order(self) -> Result<Order> {
        let invalid = |message: String| {
            OrderFlowError::Storage(StorageError::InvalidRecord(format!(
                "order {}: {message}",
                self.id
            )))
        };

        let status: OrderStatus = self.status.parse().map_err(invalid)?;
        let priority: OrderPriority = self.priority.parse().map_err(invalid)?;

        Order::restore(
            OrderId::new(self.id),
            OrderType::from(self.order_type.as_str()),
            self.amount,
            self.is_special,
            status,
            priority,
        )
        .map_err(|e| invalid(e.to_string()))
    }
}

fn default_status() -> String {
    OrderStatus::New.to_string()
}

fn default_priority() -> String {
    OrderPriority::Low.to_string()
}
