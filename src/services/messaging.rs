// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Push messaging service and token acquisition.
//!
//! Token acquisition runs three steps against the messaging service, in
//! order:
//! 1. Request authorization for remote notifications
//! 2. Register the device with the push infrastructure
//! 3. Read the current token
//!
//! Any failure aborts the sequence and is reported as a single
//! [`TokenFetchError`]. Nothing is cached between calls.

use crate::error::{FailureKind, MessagingError, TokenFetchError};
use crate::models::PushToken;
use async_trait::async_trait;
use std::str::FromStr;
use std::sync::Arc;

/// Authorization answer from the messaging service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationStatus {
    NotDetermined,
    Denied,
    Authorized,
    Provisional,
}

impl AuthorizationStatus {
    /// Whether notifications may be delivered under this status.
    pub fn is_enabled(&self) -> bool {
        matches!(
            self,
            AuthorizationStatus::Authorized | AuthorizationStatus::Provisional
        )
    }
}

impl FromStr for AuthorizationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "not_determined" => Ok(AuthorizationStatus::NotDetermined),
            "denied" => Ok(AuthorizationStatus::Denied),
            "authorized" => Ok(AuthorizationStatus::Authorized),
            "provisional" => Ok(AuthorizationStatus::Provisional),
            other => Err(format!("unknown authorization status '{}'", other)),
        }
    }
}

/// Capabilities a push provider must offer to issue device tokens.
#[async_trait]
pub trait MessagingService: Send + Sync {
    async fn request_permission(&self) -> Result<AuthorizationStatus, MessagingError>;

    async fn register_device_for_remote_messages(&self) -> Result<(), MessagingError>;

    async fn get_token(&self) -> Result<String, MessagingError>;
}

/// Messaging service for a token provisioned out of band.
///
/// Used where no push SDK runs in-process: the token issued to this
/// installation is supplied through configuration.
#[derive(Debug, Clone)]
pub struct StaticMessaging {
    authorization: AuthorizationStatus,
    token: Option<String>,
}

impl StaticMessaging {
    pub fn new(authorization: AuthorizationStatus, token: Option<String>) -> Self {
        Self {
            authorization,
            token,
        }
    }
}

#[async_trait]
impl MessagingService for StaticMessaging {
    async fn request_permission(&self) -> Result<AuthorizationStatus, MessagingError> {
        Ok(self.authorization)
    }

    async fn register_device_for_remote_messages(&self) -> Result<(), MessagingError> {
        if self.token.is_none() {
            return Err(MessagingError::Rejected(
                "no device token provisioned".to_string(),
            ));
        }
        Ok(())
    }

    async fn get_token(&self) -> Result<String, MessagingError> {
        self.token.clone().ok_or(MessagingError::NoToken)
    }
}

/// Fetches a fresh push token from the injected messaging service.
#[derive(Clone)]
pub struct TokenProvider {
    messaging: Arc<dyn MessagingService>,
}

impl TokenProvider {
    pub fn new(messaging: Arc<dyn MessagingService>) -> Self {
        Self { messaging }
    }

    /// Run authorize → register → get token.
    pub async fn fetch_token(&self) -> Result<PushToken, TokenFetchError> {
        // 1. Authorization
        let status = self.messaging.request_permission().await.map_err(|e| {
            TokenFetchError::new(FailureKind::PermissionDenied, e.to_string())
        })?;
        if !status.is_enabled() {
            return Err(TokenFetchError::new(
                FailureKind::PermissionDenied,
                format!("authorization status {:?}", status),
            ));
        }

        // 2. Device registration
        self.messaging
            .register_device_for_remote_messages()
            .await
            .map_err(|e| TokenFetchError::new(FailureKind::RegistrationRejected, e.to_string()))?;

        // 3. Token
        let token = self
            .messaging
            .get_token()
            .await
            .map_err(|e| TokenFetchError::new(FailureKind::TokenUnavailable, e.to_string()))?;
        if token.is_empty() {
            return Err(TokenFetchError::new(
                FailureKind::TokenUnavailable,
                "messaging service returned an empty token",
            ));
        }

        tracing::debug!(token = %token, "Push token fetched");
        Ok(PushToken::new(token))
    }
}
