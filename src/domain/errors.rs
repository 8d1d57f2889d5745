//! Domain error types
//!
//! This module defines the error hierarchy for OrderFlow. Collaborator faults
//! have their own enums so the pipeline can tell them apart from everything
//! else:
//!
//! - [`StorageError`] - the order store is unreachable or a query failed
//! - [`ExportError`] - the tabular sink could not be written
//! - [`VerificationError`] - the remote verification call failed in transport
//!
//! Every other [`OrderFlowError`] variant is unclassified and aborts a batch.

use thiserror::Error;

/// Main OrderFlow error type
///
/// This is the primary error type used throughout the crate.
#[derive(Debug, Error)]
pub enum OrderFlowError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Order store faults
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Tabular export faults
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Remote verification transport faults
    #[error("Verification error: {0}")]
    Verification(#[from] VerificationError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors outside an export sink
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl OrderFlowError {
    /// Returns true for faults raised by an order store, exporter or
    /// verification client.
    ///
    /// The pipeline does not consult this. Each step records only the family
    /// of its own collaborator, so a storage fault raised by an exporter
    /// still aborts the batch.
    pub fn is_collaborator_fault(&self) -> bool {
        matches!(
            self,
            OrderFlowError::Storage(_) | OrderFlowError::Export(_) | OrderFlowError::Verification(_)
        )
    }
}

/// Order store errors
///
/// These errors don't expose the underlying driver types.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Failed to reach the backing store
    #[error("Failed to connect to order store: {0}")]
    ConnectionFailed(String),

    /// A read query failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// An update statement failed
    #[error("Failed to update order: {0}")]
    UpdateFailed(String),

    /// The order to update does not exist
    #[error("Order not found: {0}")]
    NotFound(i64),

    /// A stored record could not be mapped to an order
    #[error("Invalid order record: {0}")]
    InvalidRecord(String),
}

/// Tabular export errors
#[derive(Debug, Error)]
pub enum ExportError {
    /// The sink could not be written
    #[error("Failed to write {sink}: {message}")]
    WriteFailed { sink: String, message: String },

    /// The sink location is not usable
    #[error("Export sink unavailable: {0}")]
    SinkUnavailable(String),
}

/// Remote verification errors
///
/// Only transport-level failures live here. A verification service that
/// answers with a failure status is not an error.
#[derive(Debug, Error)]
pub enum VerificationError {
    /// Failed to connect to the verification service
    #[error("Failed to connect to verification service: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("Request timeout: {0}")]
    Timeout(String),

    /// The body could not be decoded
    #[error("Invalid response from verification service: {0}")]
    InvalidResponse(String),

    /// Non-success HTTP status without a usable body
    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },
}

// Conversion from std::io::Error
impl From<std::io::Error> for OrderFlowError {
    fn from(err: std::io::Error) -> Self {
        OrderFlowError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for OrderFlowError {
    fn from(err: serde_json::Error) -> Self {
        OrderFlowError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for OrderFlowError {
    fn from(err: toml::de::Error) -> Self {
        OrderFlowError::Configuration(format!("TOML parse error: {err}"))
    }
}
