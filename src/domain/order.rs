//! Order domain model
//!
//! An [`Order`] carries immutable identity fields (id, type, amount, special
//! flag) and two fields the pipeline advances: [`OrderStatus`] and
//! [`OrderPriority`].

use super::constants::PRIORITY_THRESHOLD;
use super::errors::OrderFlowError;
use super::ids::OrderId;
use super::result::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declared order type
///
/// The rule set is closed: A, B and C have processors, anything else is kept
/// verbatim as [`OrderType::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderType {
    /// Exported to a tabular sink
    A,
    /// Verified against the remote service
    B,
    /// Completed locally based on the special flag
    C,
    /// Any unrecognized type label
    Unknown(String),
}

impl OrderType {
    /// Returns the type label as stored
    pub fn as_str(&self) -> &str {
        match self {
            OrderType::A => "A",
            OrderType::B => "B",
            OrderType::C => "C",
            OrderType::Unknown(label) => label,
        }
    }
}

impl From<&str> for OrderType {
    fn from(label: &str) -> Self {
        match label {
            "A" => OrderType::A,
            "B" => OrderType::B,
            "C" => OrderType::C,
            other => OrderType::Unknown(other.to_string()),
        }
    }
}

impl From<String> for OrderType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "A" | "B" | "C" => OrderType::from(label.as_str()),
            _ => OrderType::Unknown(label),
        }
    }
}

impl From<OrderType> for String {
    fn from(order_type: OrderType) -> Self {
        match order_type {
            OrderType::Unknown(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Processing status of an order
///
/// `New` is the only non-terminal value. `DbError` may replace any other
/// terminal status when persisting the order fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    New,
    ProcessingError,
    UnknownType,
    Exported,
    ExportFailed,
    Processed,
    Pending,
    Error,
    ApiError,
    ApiFailure,
    Completed,
    InProgress,
    DbError,
}

impl OrderStatus {
    /// All statuses, in declaration order
    pub const ALL: [OrderStatus; 13] = [
        OrderStatus::New,
        OrderStatus::ProcessingError,
        OrderStatus::UnknownType,
        OrderStatus::Exported,
        OrderStatus::ExportFailed,
        OrderStatus::Processed,
        OrderStatus::Pending,
        OrderStatus::Error,
        OrderStatus::ApiError,
        OrderStatus::ApiFailure,
        OrderStatus::Completed,
        OrderStatus::InProgress,
        OrderStatus::DbError,
    ];

    /// Returns the persisted string form
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::New => "new",
            OrderStatus::ProcessingError => "processing_error",
            OrderStatus::UnknownType => "unknown_type",
            OrderStatus::Exported => "exported",
            OrderStatus::ExportFailed => "export_failed",
            OrderStatus::Processed => "processed",
            OrderStatus::Pending => "pending",
            OrderStatus::Error => "error",
            OrderStatus::ApiError => "api_error",
            OrderStatus::ApiFailure => "api_failure",
            OrderStatus::Completed => "completed",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::DbError => "db_error",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        OrderStatus::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown order status: {s}"))
    }
}

/// Processing priority of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderPriority {
    #[default]
    Low,
    High,
}

impl OrderPriority {
    /// Priority for a given amount: high strictly above the threshold
    pub fn for_amount(amount: f64) -> Self {
        if amount > PRIORITY_THRESHOLD {
            OrderPriority::High
        } else {
            OrderPriority::Low
        }
    }

    /// Returns the persisted string form
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderPriority::Low => "low",
            OrderPriority::High => "high",
        }
    }
}

impl fmt::Display for OrderPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderPriority {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "low" => Ok(OrderPriority::Low),
            "high" => Ok(OrderPriority::High),
            other => Err(format!("Unknown order priority: {other}")),
        }
    }
}

/// A business order
///
/// # Examples
///
/// ```
/// use orderflow::domain::{Order, OrderId, OrderPriority, OrderStatus, OrderType};
///
/// let order = Order::new(OrderId::new(1), OrderType::A, 100.0, false).unwrap();
/// assert_eq!(order.status(), OrderStatus::New);
/// assert_eq!(order.priority(), OrderPriority::Low);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    id: OrderId,
    order_type: OrderType,
    amount: f64,
    is_special: bool,
    status: OrderStatus,
    priority: OrderPriority,
}

impl Order {
    /// Creates a fresh order with status `New` and priority `Low`
    ///
    /// # Errors
    ///
    /// Returns a validation error if `amount` is negative or not finite.
    pub fn new(id: OrderId, order_type: OrderType, amount: f64, is_special: bool) -> Result<Self> {
        Self::restore(
            id,
            order_type,
            amount,
            is_special,
            OrderStatus::New,
            OrderPriority::Low,
        )
    }

    /// Rebuilds an order from persisted state
    ///
    /// # Errors
    ///
    /// Returns a validation error if `amount` is negative or not finite.
    pub fn restore(
        id: OrderId,
        order_type: OrderType,
        amount: f64,
        is_special: bool,
        status: OrderStatus,
        priority: OrderPriority,
    ) -> Result<Self> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(OrderFlowError::Validation(format!(
                "Order {id} has invalid amount {amount}; amounts must be finite and non-negative"
            )));
        }

        Ok(Self {
            id,
            order_type,
            amount,
            is_special,
            status,
            priority,
        })
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn order_type(&self) -> &OrderType {
        &self.order_type
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn is_special(&self) -> bool {
        self.is_special
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn priority(&self) -> OrderPriority {
        self.priority
    }

    /// Moves the order to a new status
    pub(crate) fn set_status(&mut self, status: OrderStatus) {
        debug_assert_ne!(status, OrderStatus::New, "orders never re-enter NEW");
        self.status = status;
    }

    /// Recomputes priority from the current amount, discarding the old value
    pub(crate) fn assign_priority(&mut self) {
        self.priority = OrderPriority::for_amount(self.amount);
    }
}
