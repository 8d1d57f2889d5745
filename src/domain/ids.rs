//! Domain identifier types
//!
//! Newtype wrappers keep order ids and owner ids from being mixed up. Both are
//! integers assigned by the order store.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order identifier newtype wrapper
///
/// # Examples
///
/// ```
/// use orderflow::domain::ids::OrderId;
/// use std::str::FromStr;
///
/// let order_id = OrderId::from_str("42").unwrap();
/// assert_eq!(order_id.value(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(i64);

impl OrderId {
    /// Creates a new OrderId
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|e| format!("Invalid order ID '{s}': {e}"))
    }
}

impl From<i64> for OrderId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Owner identifier newtype wrapper
///
/// The owner is the batch key: all orders of one owner are fetched and
/// processed together.
///
/// # Examples
///
/// ```
/// use orderflow::domain::ids::OwnerId;
///
/// let owner: OwnerId = " 7 ".parse().unwrap();
/// assert_eq!(owner.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OwnerId(i64);

impl OwnerId {
    /// Creates a new OwnerId
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw integer value
    pub const fn value(&self) -> i64 {
        self.0
    }

    /// Parses a comma-separated list of owner ids
    ///
    /// Empty segments are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first segment that is not an integer.
    pub fn parse_list(input: &str) -> Result<Vec<Self>, String> {
        input
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Self::from_str)
            .collect()
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OwnerId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|e| format!("Invalid owner ID '{s}': {e}"))
    }
}

impl From<i64> for OwnerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}
