//! PostgreSQL client
//!
//! Wraps a deadpool connection pool and applies the configured statement
//! timeout to every query.

use crate::config::schema::PostgreSQLConfig;
use crate::domain::{OrderFlowError, Result, StorageError};
use deadpool_postgres::{Manager, ManagerConfig, Pool, RecyclingMethod};
use secrecy::ExposeSecret;
use std::time::Duration;
use tokio_postgres::types::ToSql;
use tokio_postgres::{NoTls, Row};

/// PostgreSQL client for OrderFlow
pub struct PostgreSQLClient {
    pool: Pool,
    config: PostgreSQLConfig,
}

impl PostgreSQLClient {
    /// Create a new PostgreSQL client
    ///
    /// The pool connects lazily, so this does not touch the network.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the connection string cannot be
    /// parsed, or a storage error if the pool cannot be built.
    pub fn new(config: PostgreSQLConfig) -> Result<Self> {
        let pg_config: tokio_postgres::Config = config
            .connection_string
            .expose_secret()
            .as_str()
            .parse()
            .map_err(|e| {
                OrderFlowError::Configuration(format!(
                    "Invalid PostgreSQL connection string: {e}"
                ))
            })?;

        let manager = Manager::from_config(
            pg_config,
            NoTls,
            ManagerConfig {
                recycling_method: RecyclingMethod::Fast,
            },
        );

        let timeout = Some(Duration::from_secs(config.connection_timeout_seconds));
        let pool = Pool::builder(manager)
            .max_size(config.max_connections)
            .runtime(deadpool_postgres::Runtime::Tokio1)
            .wait_timeout(timeout)
            .create_timeout(timeout)
            .recycle_timeout(timeout)
            .build()
            .map_err(|e| {
                StorageError::ConnectionFailed(format!("Failed to create connection pool: {e}"))
            })?;

        Ok(Self { pool, config })
    }

    /// Orders table name from configuration
    pub fn table_name(&self) -> &str {
        &self.config.table_name
    }

    /// Get a connection from the pool
    ///
    /// # Errors
    ///
    /// Returns a storage error if a connection cannot be obtained.
    pub async fn get_connection(&self) -> Result<deadpool_postgres::Object> {
        self.pool.get().await.map_err(|e| {
            OrderFlowError::Storage(StorageError::ConnectionFailed(format!(
                "Failed to get connection from pool: {e}"
            )))
        })
    }

    /// Attempts to get a connection from the pool and execute a simple query.
    pub async fn test_connection(&self) -> Result<()> {
        let client = self.get_connection().await?;

        client.query_one("SELECT 1", &[]).await.map_err(|e| {
            StorageError::ConnectionFailed(format!("Connection test failed: {e}"))
        })?;

        tracing::info!(
            connection = %self.connection_string_safe(),
            "PostgreSQL connection test successful"
        );
        Ok(())
    }

    /// Run a batch of DDL statements
    ///
    /// # Errors
    ///
    /// Returns a storage error if the batch fails.
    pub async fn batch_execute(&self, sql: &str) -> Result<()> {
        let client = self.get_connection().await?;
        client
            .batch_execute(sql)
            .await
            .map_err(|e| StorageError::QueryFailed(format!("Failed to execute batch: {e}")))?;
        Ok(())
    }

    async fn set_statement_timeout(&self, client: &deadpool_postgres::Object) -> Result<()> {
        let timeout_query = format!(
            "SET statement_timeout = {}",
            self.config.statement_timeout_seconds * 1000
        );
        client.execute(timeout_query.as_str(), &[]).await.map_err(|e| {
            StorageError::QueryFailed(format!("Failed to set statement timeout: {e}"))
        })?;
        Ok(())
    }

    /// Execute a query and return rows
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::QueryFailed`] if the query fails.
    pub async fn query(&self, query: &str, params: &[&(dyn ToSql + Sync)]) -> Result<Vec<Row>> {
        let client = self.get_connection().await?;
        self.set_statement_timeout(&client).await?;

        client
            .query(query, params)
            .await
            .map_err(|e| OrderFlowError::Storage(StorageError::QueryFailed(e.to_string())))
    }

    /// Execute a statement and return the number of affected rows
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::UpdateFailed`] if the statement fails.
    pub async fn execute(&self, statement: &str, params: &[&(dyn ToSql + Sync)]) -> Result<u64> {
        let client = self.get_connection().await?;
        self.set_statement_timeout(&client).await?;

        client
            .execute(statement, params)
            .await
            .map_err(|e| OrderFlowError::Storage(StorageError::UpdateFailed(e.to_string())))
    }

    /// Get the connection string (without credentials)
    pub fn connection_string_safe(&self) -> String {
        redact_connection_string(self.config.connection_string.expose_secret().as_str())
    }

    /// Get the pool statistics
    pub fn pool_status(&self) -> deadpool_postgres::Status {
        self.pool.status()
    }
}

fn redact_connection_string(connection_string: &str) -> String {
    match connection_string.rsplit_once('@') {
        Some((_, host)) => format!("postgresql://***@{host}"),
        None => "postgresql://***".to_string(),
    }
}
