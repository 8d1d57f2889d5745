//! Verification client abstraction

use super::models::VerificationResponse;
use crate::domain::{OrderId, Result};
use async_trait::async_trait;

/// Remote verification of Type B orders
#[async_trait]
pub trait VerificationClient: Send + Sync {
    /// Ask the service to verify an order
    ///
    /// A service that answers with a failure or error status is still an
    /// `Ok` response. Only transport problems are errors.
    ///
    /// # Errors
    ///
    /// Returns [`VerificationError`](crate::domain::VerificationError) if the
    /// call cannot be completed or its answer cannot be decoded.
    async fn verify(&self, order_id: OrderId) -> Result<VerificationResponse>;
}
