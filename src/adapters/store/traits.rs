//! Order store abstraction
//!
//! This module defines the trait that order store backends must implement
//! to work with OrderFlow.

use crate::domain::{Order, OwnerId, Result};
use async_trait::async_trait;

/// Persistence for orders
///
/// Implementations report every backend failure as
/// [`StorageError`](crate::domain::StorageError) so the pipeline can tell a
/// storage fault apart from other errors.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Fetch every order belonging to an owner
    ///
    /// Orders come back in a stable order (ascending id for the shipped
    /// backends). An owner with no orders yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the backend cannot be queried or a stored
    /// record cannot be mapped to an [`Order`].
    async fn fetch_by_owner(&self, owner_id: OwnerId) -> Result<Vec<Order>>;

    /// Persist the status and priority of an order
    ///
    /// # Errors
    ///
    /// Returns a storage error if the order does not exist or the write fails.
    async fn update(&self, order: &Order) -> Result<()>;

    /// Check that the backend is reachable
    ///
    /// # Errors
    ///
    /// Returns a storage error if the connection test fails.
    async fn test_connection(&self) -> Result<()> {
        Ok(())
    }

    /// Human-readable backend name for logs
    fn backend_name(&self) -> &'static str;
}
