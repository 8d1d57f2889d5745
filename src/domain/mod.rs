//! Domain models and types for OrderFlow.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`OrderId`], [`OwnerId`])
//! - **The order model** ([`Order`], [`OrderType`], [`OrderStatus`], [`OrderPriority`])
//! - **Business thresholds** ([`constants`])
//! - **Error types** ([`OrderFlowError`], [`StorageError`], [`ExportError`], [`VerificationError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, OrderFlowError>`]:
//!
//! ```rust
//! use orderflow::domain::{Order, OrderId, OrderType, Result};
//!
//! fn example() -> Result<Order> {
//!     // Negative amounts are rejected with a validation error
//!     let order = Order::new(OrderId::new(1), OrderType::B, 42.0, true)?;
//!     Ok(order)
//! }
//! ```

pub mod constants;
pub mod errors;
pub mod ids;
pub mod order;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{ExportError, OrderFlowError, StorageError, VerificationError};
pub use ids::{OrderId, OwnerId};
pub use order::{Order, OrderPriority, OrderStatus, OrderType};
pub use result::Result;
