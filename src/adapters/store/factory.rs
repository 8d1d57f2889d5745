//! Order store factory
//!
//! Creates the order store selected by `store_backend`.

use super::file::FileOrderStore;
use super::traits::OrderStore;
use crate::adapters::postgresql::PostgreSQLOrderStore;
use crate::config::schema::{OrderFlowConfig, StoreBackend};
use crate::domain::{OrderFlowError, Result};
use std::sync::Arc;

/// Create the configured order store
///
/// The PostgreSQL backend creates its table if it does not exist.
///
/// # Errors
///
/// Returns a configuration error if the selected backend has no section, or
/// a storage error if the backend cannot be initialized.
pub async fn create_order_store(config: &OrderFlowConfig) -> Result<Arc<dyn OrderStore>> {
    match config.store_backend {
        StoreBackend::PostgreSQL => {
            let pg_config = config.postgresql.as_ref().ok_or_else(|| {
                OrderFlowError::Configuration(
                    "postgresql configuration is required when store_backend = 'postgresql'"
                        .to_string(),
                )
            })?;

            tracing::info!("Creating PostgreSQL order store");
            let store = PostgreSQLOrderStore::new(pg_config.clone())?;
            store.ensure_schema().await?;

            Ok(Arc::new(store) as Arc<dyn OrderStore>)
        }
        StoreBackend::File => {
            let file_config = config.file_store.as_ref().ok_or_else(|| {
                OrderFlowError::Configuration(
                    "file_store configuration is required when store_backend = 'file'"
                        .to_string(),
                )
            })?;

            tracing::info!(path = %file_config.path, "Creating file order store");
            let store = FileOrderStore::new(&file_config.path);
            store.test_connection().await?;

            Ok(Arc::new(store) as Arc<dyn OrderStore>)
        }
    }
}
