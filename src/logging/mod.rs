//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - JSON-formatted logs in the rolling file
//! - Configurable log levels, overridable with `RUST_LOG`
//! - Local file logging with daily or hourly rotation
//!
//! # Example
//!
//! ```no_run
//! use orderflow::logging::init_logging;
//! use orderflow::config::LoggingConfig;
//!
//! let config = LoggingConfig::console_only();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!("Application started");
//! ```

pub mod structured;

pub use structured::{init_logging, parse_log_level, LoggingGuard};

/// Log the outcome of processing a single order
///
/// # Example
///
/// ```no_run
/// use orderflow::log_order_outcome;
/// use orderflow::domain::{Order, OrderId, OrderType};
///
/// let order = Order::new(OrderId::new(1), OrderType::C, 10.0, true).unwrap();
/// log_order_outcome!(&order);
/// ```
#[macro_export]
macro_rules! log_order_outcome {
    ($order:expr) => {
        tracing::debug!(
            order_id = %$order.id(),
            order_type = %$order.order_type(),
            status = %$order.status(),
            priority = %$order.priority(),
            "Order processed"
        );
    };
}

/// Log the completion of a batch
///
/// # Example
///
/// ```no_run
/// use orderflow::log_batch_complete;
/// use std::time::Duration;
///
/// log_batch_complete!("7", 12, true, Duration::from_millis(350));
/// ```
#[macro_export]
macro_rules! log_batch_complete {
    ($owner:expr, $count:expr, $succeeded:expr, $duration:expr) => {
        tracing::info!(
            owner_id = %$owner,
            count = $count,
            succeeded = $succeeded,
            duration_ms = $duration.as_millis() as u64,
            "Batch completed"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use orderflow::log_error_with_context;
/// use orderflow::domain::OrderFlowError;
///
/// let error = OrderFlowError::Configuration("Invalid config".to_string());
/// log_error_with_context!(&error, "Failed to load configuration");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = %$context,
            "Error occurred"
        );
    };
}
