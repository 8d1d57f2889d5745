//! HTTP verification client

use super::models::VerificationResponse;
use super::traits::VerificationClient;
use crate::config::schema::VerificationConfig;
use crate::domain::{OrderFlowError, OrderId, Result, VerificationError};
use async_trait::async_trait;
use reqwest::{Client, ClientBuilder};
use secrecy::ExposeSecret;
use std::time::Duration;
use url::Url;

/// Verification client that calls `GET {base_url}/orders/{id}/verification`
pub struct HttpVerificationClient {
    client: Client,
    base_url: Url,
    config: VerificationConfig,
}

impl HttpVerificationClient {
    /// Build a client from configuration
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the base URL is invalid or the HTTP
    /// client cannot be built.
    pub fn new(config: VerificationConfig) -> Result<Self> {
        let mut base_url = Url::parse(&config.base_url).map_err(|e| {
            OrderFlowError::Configuration(format!(
                "Invalid verification base_url '{}': {e}",
                config.base_url
            ))
        })?;
        // Keep any path prefix when joining relative segments
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let mut client_builder = ClientBuilder::new()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(config.timeout_seconds));

        if !config.tls_verify {
            tracing::warn!(
                base_url = %config.base_url,
                "TLS certificate verification disabled for verification service"
            );
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder.build().map_err(|e| {
            OrderFlowError::Configuration(format!("Failed to build HTTP client: {e}"))
        })?;

        Ok(Self {
            client,
            base_url,
            config,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the verification endpoint for an order
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the URL cannot be joined.
    pub fn verification_url(&self, order_id: OrderId) -> Result<Url> {
        self.base_url
            .join(&format!("orders/{order_id}/verification"))
            .map_err(|e| OrderFlowError::Configuration(format!("Invalid verification URL: {e}")))
    }
}

#[async_trait]
impl VerificationClient for HttpVerificationClient {
    async fn verify(&self, order_id: OrderId) -> Result<VerificationResponse> {
        let url = self.verification_url(order_id)?;

        let mut request = self.client.get(url.clone());
        if let Some(ref token) = self.config.api_token {
            request = request.bearer_auth(token.expose_secret().as_str());
        }

        let resp = request.send().await.map_err(|e| {
            if e.is_timeout() {
                VerificationError::Timeout(format!("{url}: {e}"))
            } else {
                VerificationError::ConnectionFailed(format!("{url}: {e}"))
            }
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            if e.is_timeout() {
                VerificationError::Timeout(format!("{url}: {e}"))
            } else {
                VerificationError::InvalidResponse(format!("Failed to read body: {e}"))
            }
        })?;

        match serde_json::from_str::<VerificationResponse>(&body) {
            Ok(response) => {
                tracing::debug!(
                    order_id = %order_id,
                    http_status = status.as_u16(),
                    api_status = ?response.status,
                    "Verification response received"
                );
                Ok(response)
            }
            Err(e) if status.is_success() => Err(VerificationError::InvalidResponse(format!(
                "Failed to decode verification response: {e}"
            ))
            .into()),
            Err(_) => Err(VerificationError::ServerError {
                status: status.as_u16(),
                message: body,
            }
            .into()),
        }
    }
}
