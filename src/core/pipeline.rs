//! Order pipeline - drives each order through its type rule, priority
//! assignment and persistence

use crate::adapters::export::{CsvExporter, TabularExporter};
use crate::adapters::store::{create_order_store, OrderStore};
use crate::adapters::verification::{HttpVerificationClient, VerificationClient};
use crate::config::OrderFlowConfig;
use crate::core::outcome::BatchOutcome;
use crate::core::processors::{complete_order, export_order, verify_order, DEFAULT_FILE_PREFIX};
use crate::domain::{Order, OrderFlowError, OrderStatus, OrderType, OwnerId, Result};
use crate::{log_error_with_context, log_order_outcome};
use std::sync::Arc;
use std::time::Instant;

/// Order pipeline
///
/// Orders are handled one at a time, in input order. Each order gets exactly
/// one type step and one priority step, then is written back to the store.
pub struct OrderPipeline {
    store: Arc<dyn OrderStore>,
    exporter: Arc<dyn TabularExporter>,
    verifier: Arc<dyn VerificationClient>,
    file_prefix: String,
}

impl OrderPipeline {
    /// Create a pipeline over the given collaborators
    pub fn new(
        store: Arc<dyn OrderStore>,
        exporter: Arc<dyn TabularExporter>,
        verifier: Arc<dyn VerificationClient>,
    ) -> Self {
        Self {
            store,
            exporter,
            verifier,
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
        }
    }

    /// Set the prefix of Type A sink names
    pub fn with_file_prefix(mut self, file_prefix: impl Into<String>) -> Self {
        self.file_prefix = file_prefix.into();
        self
    }

    /// Build the pipeline with the collaborators named in configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the order store cannot be initialized or the
    /// verification client cannot be built.
    pub async fn from_config(config: &OrderFlowConfig) -> Result<Self> {
        let store = create_order_store(config).await?;
        let exporter = Arc::new(CsvExporter::new(&config.export.output_dir));
        let verifier = Arc::new(HttpVerificationClient::new(config.verification.clone())?);

        tracing::info!(
            store = store.backend_name(),
            output_dir = %config.export.output_dir,
            verification_url = %config.verification.base_url,
            "Order pipeline ready"
        );

        Ok(Self::new(store, exporter, verifier).with_file_prefix(&config.export.file_prefix))
    }

    /// Fetch and process every order of an owner
    ///
    /// Returns `false` if the fetch fails or the batch aborts.
    pub async fn process_for_owner(&self, owner_id: OwnerId) -> bool {
        self.run_for_owner(owner_id).await.succeeded
    }

    /// Fetch and process every order of an owner, reporting the outcome
    pub async fn run_for_owner(&self, owner_id: OwnerId) -> BatchOutcome {
        let start = Instant::now();

        let mut orders = match self.store.fetch_by_owner(owner_id).await {
            Ok(orders) => orders,
            Err(e) => {
                tracing::error!(
                    owner_id = %owner_id,
                    error = %e,
                    "Failed to fetch orders"
                );
                return BatchOutcome::fetch_failure(Some(owner_id), start.elapsed());
            }
        };

        tracing::info!(owner_id = %owner_id, count = orders.len(), "Processing orders");

        let processed = self.process_orders(&mut orders, Some(owner_id)).await;

        BatchOutcome {
            owner_id: Some(owner_id),
            succeeded: processed == orders.len(),
            fetch_failed: false,
            processed,
            orders,
            duration: start.elapsed(),
        }
    }

    /// Process a batch of orders in place
    ///
    /// Returns `true` if every order went through. Returns `false` as soon as
    /// an error that is not a collaborator fault escapes an order; later
    /// orders are left as they were.
    pub async fn process_batch(&self, orders: &mut [Order], owner_id: Option<OwnerId>) -> bool {
        self.process_orders(orders, owner_id).await == orders.len()
    }

    /// Returns how many orders completed before the batch ended
    async fn process_orders(&self, orders: &mut [Order], owner_id: Option<OwnerId>) -> usize {
        for (index, order) in orders.iter_mut().enumerate() {
            if let Err(e) = self.process_order(order, owner_id).await {
                log_error_with_context!(&e, format!("Batch aborted at order {}", order.id()));
                return index;
            }
        }
        orders.len()
    }

    async fn process_order(&self, order: &mut Order, owner_id: Option<OwnerId>) -> Result<()> {
        self.apply_type_rule(order, owner_id).await?;

        order.assign_priority();

        match self.store.update(order).await {
            Ok(()) => {}
            Err(OrderFlowError::Storage(e)) => {
                tracing::warn!(
                    order_id = %order.id(),
                    lost_status = %order.status(),
                    error = %e,
                    "Failed to persist order"
                );
                order.set_status(OrderStatus::DbError);
            }
            Err(e) => return Err(e),
        }

        log_order_outcome!(order);
        Ok(())
    }

    async fn apply_type_rule(&self, order: &mut Order, owner_id: Option<OwnerId>) -> Result<()> {
        match order.order_type() {
            OrderType::A => {
                export_order(order, owner_id, self.exporter.as_ref(), &self.file_prefix).await
            }
            OrderType::B => verify_order(order, self.verifier.as_ref()).await,
            OrderType::C => {
                complete_order(order);
                Ok(())
            }
            OrderType::Unknown(_) => {
                tracing::debug!(
                    order_id = %order.id(),
                    order_type = %order.order_type(),
                    "Unknown order type"
                );
                order.set_status(OrderStatus::UnknownType);
                Ok(())
            }
        }
    }
}
