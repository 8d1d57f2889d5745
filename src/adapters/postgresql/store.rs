//! PostgreSQL order store

use super::client::PostgreSQLClient;
use crate::adapters::store::models::OrderRecord;
use crate::adapters::store::OrderStore;
use crate::config::schema::PostgreSQLConfig;
use crate::domain::{Order, OrderFlowError, OwnerId, Result, StorageError};
use async_trait::async_trait;
use tokio_postgres::Row;

/// Order store backed by a single PostgreSQL table
pub struct PostgreSQLOrderStore {
    client: PostgreSQLClient,
    select_sql: String,
    update_sql: String,
}

impl PostgreSQLOrderStore {
    /// Create a store from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(config: PostgreSQLConfig) -> Result<Self> {
        Ok(Self::with_client(PostgreSQLClient::new(config)?))
    }

    pub fn with_client(client: PostgreSQLClient) -> Self {
        let table = client.table_name().to_string();
        Self {
            select_sql: format!(
                "SELECT id, owner_id, order_type, amount, is_special, status, priority \
                 FROM {table} WHERE owner_id = $1 ORDER BY id"
            ),
            update_sql: format!("UPDATE {table} SET status = $1, priority = $2 WHERE id = $3"),
            client,
        }
    }

    /// Create the orders table and its owner index if they do not exist
    ///
    /// # Errors
    ///
    /// Returns a storage error if the DDL fails.
    pub async fn ensure_schema(&self) -> Result<()> {
        self.client
            .batch_execute(&schema_sql(self.client.table_name()))
            .await?;
        tracing::info!(table = self.client.table_name(), "Order table ready");
        Ok(())
    }
}

/// DDL for the orders table
pub fn schema_sql(table: &str) -> String {
    format!(
        "CREATE TABLE IF NOT EXISTS {table} (
    id BIGINT PRIMARY KEY,
    owner_id BIGINT NOT NULL,
    order_type TEXT NOT NULL,
    amount DOUBLE PRECISION NOT NULL CHECK (amount >= 0),
    is_special BOOLEAN NOT NULL DEFAULT FALSE,
    status TEXT NOT NULL DEFAULT 'new',
    priority TEXT NOT NULL DEFAULT 'low'
);
CREATE INDEX IF NOT EXISTS idx_{table}_owner_id ON {table} (owner_id);"
    )
}

fn record_from_row(row: &Row) -> Result<OrderRecord> {
    let invalid = |e: tokio_postgres::Error| {
        OrderFlowError::Storage(StorageError::InvalidRecord(format!(
            "Failed to read order row: {e}"
        )))
    };

    Ok(OrderRecord {
        id: row.try_get("id").map_err(invalid)?,
        owner_id: row.try_get("owner_id").map_err(invalid)?,
        order_type: row.try_get("order_type").map_err(invalid)?,
        amount: row.try_get("amount").map_err(invalid)?,
        is_special: row.try_get("is_special").map_err(invalid)?,
        status: row.try_get("status").map_err(invalid)?,
        priority: row.try_get("priority").map_err(invalid)?,
    })
}

#[async_trait]
impl OrderStore for PostgreSQLOrderStore {
    async fn fetch_by_owner(&self, owner_id: OwnerId) -> Result<Vec<Order>> {
        let owner = owner_id.value();
        let rows = self.client.query(&self.select_sql, &[&owner]).await?;

        tracing::debug!(owner_id = owner, rows = rows.len(), "Fetched orders");

        rows.iter()
            .map(|row| record_from_row(row).and_then(OrderRecord::into_order))
            .collect()
    }

    async fn update(&self, order: &Order) -> Result<()> {
        let id = order.id().value();
        let status = order.status().as_str();
        let priority = order.priority().as_str();

        let affected = self
            .client
            .execute(&self.update_sql, &[&status, &priority, &id])
            .await?;

        if affected == 0 {
            return Err(StorageError::NotFound(id).into());
        }
        Ok(())
    }

    async fn test_connection(&self) -> Result<()> {
        self.client.test_connection().await
    }

    fn backend_name(&self) -> &'static str {
        "postgresql"
    }
}
