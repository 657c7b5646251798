// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Registration backend client.
//!
//! Sends `{address, token}` to `POST /registerTokenForAddress`. Any 2xx
//! with a JSON body counts as success; the body is not interpreted.
//! No retries and no timeouts: a failed call is reported once.

use crate::error::{FailureKind, RegistrationError};
use crate::models::{RegistrationReceipt, RegistrationRequest};
use async_trait::async_trait;

/// Default backend the mobile build shipped with.
pub const DEFAULT_ENDPOINT: &str = "http://192.168.1.3:8080";

/// Path the backend accepts registrations on.
pub const REGISTER_PATH: &str = "/registerTokenForAddress";

/// Anything that can deliver a registration to the backend.
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationReceipt, RegistrationError>;
}

/// HTTP registration client.
#[derive(Clone)]
pub struct RegistrationClient {
    http: reqwest::Client,
    base_url: String,
}

impl RegistrationClient {
    /// Create a client for the given backend base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self) -> String {
        format!("{}{}", self.base_url, REGISTER_PATH)
    }

    /// Check response status and parse JSON body.
    async fn check_response_json(
        &self,
        response: reqwest::Response,
    ) -> Result<RegistrationReceipt, RegistrationError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RegistrationError::new(
                FailureKind::ServerRejected,
                format!("HTTP {}: {}", status, body),
            ));
        }

        let body = response.json::<serde_json::Value>().await.map_err(|e| {
            RegistrationError::new(
                FailureKind::InvalidResponse,
                format!("JSON parse error: {}", e),
            )
        })?;

        Ok(RegistrationReceipt {
            status: status.as_u16(),
            body,
        })
    }
}

impl Default for RegistrationClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[async_trait]
impl RegistrationApi for RegistrationClient {
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationReceipt, RegistrationError> {
        let url = self.url();
        tracing::debug!(url = %url, address = %request.address, "Sending registration");

        let response = self
            .http
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| RegistrationError::new(FailureKind::NetworkError, e.to_string()))?;

        self.check_response_json(response).await
    }
}
