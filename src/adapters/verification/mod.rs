//! Remote order verification
//!
//! Type B orders are checked against an external service. The service
//! answers with an [`ApiStatus`] and, on success, a numeric payload.

pub mod http;
pub mod models;
pub mod traits;

pub use http::HttpVerificationClient;
pub use models::{ApiStatus, VerificationResponse};
pub use traits::VerificationClient;
