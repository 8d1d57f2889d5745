//! Verification service payloads

use serde::{Deserialize, Serialize};

/// Outcome reported by the verification service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Failure,
    Error,
}

/// Response to a verification call
///
/// `data` is only meaningful when `status` is [`ApiStatus::Success`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerificationResponse {
    pub status: ApiStatus,
    #[serde(default)]
    pub data: Option<f64>,
}

impl VerificationResponse {
    pub fn success(data: f64) -> Self {
        Self {
            status: ApiStatus::Success,
            data: Some(data),
        }
    }

    pub fn with_status(status: ApiStatus) -> Self {
        Self { status, data: None }
    }

    pub fn is_success(&self) -> bool {
        self.status == ApiStatus::Success
    }
}
