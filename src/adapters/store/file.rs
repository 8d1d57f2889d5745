//! JSON file order store
//!
//! Orders live in a single document of the form `{ "orders": [ ... ] }`. Each
//! update rewrites the document through a temporary file and a rename.

use super::models::OrderRecord;
use super::traits::OrderStore;
use crate::domain::{Order, OrderFlowError, OwnerId, Result, StorageError};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

#[derive(Debug, Default, Serialize, Deserialize)]
struct OrdersDocument {
    #[serde(default)]
    orders: Vec<OrderRecord>,
}

/// Order store backed by a JSON document on disk
#[derive(Debug)]
pub struct FileOrderStore {
    path: PathBuf,
    // Serializes read-modify-write cycles on the document
    lock: Mutex<()>,
}

impl FileOrderStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes a fresh document containing the given orders
    ///
    /// # Errors
    ///
    /// Returns a storage error if the document cannot be written.
    pub async fn seed(&self, orders: impl IntoIterator<Item = (OwnerId, Order)>) -> Result<()> {
        let _guard = self.lock.lock().await;
        let document = OrdersDocument {
            orders: orders
                .into_iter()
                .map(|(owner_id, order)| OrderRecord::from_order(&order, owner_id))
                .collect(),
        };
        self.write_document(&document).await
    }

    async fn read_document(&self) -> Result<OrdersDocument> {
        let contents = fs::read_to_string(&self.path).await.map_err(|e| {
            StorageError::ConnectionFailed(format!(
                "Failed to read order file {}: {}",
                self.path.display(),
                e
            ))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            OrderFlowError::Storage(StorageError::InvalidRecord(format!(
                "Malformed order file {}: {}",
                self.path.display(),
                e
            )))
        })
    }

    async fn write_document(&self, document: &OrdersDocument) -> Result<()> {
        let write_failed = |e: String| {
            OrderFlowError::Storage(StorageError::UpdateFailed(format!(
                "Failed to write order file {}: {}",
                self.path.display(),
                e
            )))
        };

        let json = serde_json::to_vec_pretty(document).map_err(|e| write_failed(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| write_failed(e.to_string()))?;
        }

        let temp_path = self.path.with_extension("json.tmp");
        fs::write(&temp_path, json)
            .await
            .map_err(|e| write_failed(e.to_string()))?;
        fs::rename(&temp_path, &self.path)
            .await
            .map_err(|e| write_failed(e.to_string()))?;

        Ok(())
    }
}

#[async_trait]
impl OrderStore for FileOrderStore {
    async fn fetch_by_owner(&self, owner_id: OwnerId) -> Result<Vec<Order>> {
        let _guard = self.lock.lock().await;
        let document = self.read_document().await?;

        let mut orders = document
            .orders
            .into_iter()
            .filter(|record| record.owner_id == owner_id.value())
            .map(OrderRecord::into_order)
            .collect::<Result<Vec<_>>>()?;
        orders.sort_by_key(Order::id);
        Ok(orders)
    }

    async fn update(&self, order: &Order) -> Result<()> {
        let _guard = self.lock.lock().await;
        let mut document = self.read_document().await?;

        let record = document
            .orders
            .iter_mut()
            .find(|record| record.id == order.id().value())
            .ok_or(StorageError::NotFound(order.id().value()))?;
        record.status = order.status().to_string();
        record.priority = order.priority().to_string();

        self.write_document(&document).await
    }

    async fn test_connection(&self) -> Result<()> {
        let _guard = self.lock.lock().await;
        self.read_document().await.map(|_| ())
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
