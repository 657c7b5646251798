// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Registration flow.
//!
//! Handles the core workflow:
//! 1. Validate the address (fail fast, state untouched)
//! 2. Enter `Loading`, unless an attempt is already in flight
//! 3. Fetch a push token
//! 4. Send `{address, token}` to the backend
//! 5. Settle in `Registered(token)` or `Failed`
//!
//! State is published on a watch channel so a screen can observe every
//! transition.

use crate::error::FlowError;
use crate::models::{Address, PushToken, RegistrationRequest, RegistrationState, Submission};
use crate::services::{RegistrationApi, TokenProvider};
use std::sync::Arc;
use tokio::sync::watch;

/// Orchestrates token fetch and backend registration.
pub struct RegistrationFlow {
    tokens: TokenProvider,
    api: Arc<dyn RegistrationApi>,
    state: watch::Sender<RegistrationState>,
}

impl RegistrationFlow {
    pub fn new(tokens: TokenProvider, api: Arc<dyn RegistrationApi>) -> Self {
        let (state, _) = watch::channel(RegistrationState::Idle);
        Self { tokens, api, state }
    }

    /// Current state.
    pub fn state(&self) -> RegistrationState {
        self.state.borrow().clone()
    }

    /// Observe state transitions.
    pub fn subscribe(&self) -> watch::Receiver<RegistrationState> {
        self.state.subscribe()
    }

    /// Handle one press of "Register Device".
    pub async fn submit(&self, address: &str) -> Submission {
        let address = match Address::parse(address) {
            Ok(address) => address,
            Err(e) => {
                tracing::info!("Registration rejected: empty address");
                return Submission::Failed(e.into());
            }
        };

        if !self.begin() {
            tracing::debug!("Registration already in progress, ignoring trigger");
            return Submission::Busy;
        }

        tracing::info!(address = %address, "Registration started");
        match self.run(address).await {
            Ok(token) => {
                tracing::info!(token = %token, "Device registered");
                self.state
                    .send_replace(RegistrationState::Registered(token.clone()));
                Submission::Registered(token)
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    kind = e.kind().map(|k| k.as_str()),
                    "Registration failed"
                );
                self.state.send_replace(RegistrationState::Failed);
                Submission::Failed(e)
            }
        }
    }

    /// Move to `Loading` unless already there. Returns whether it moved.
    fn begin(&self) -> bool {
        self.state.send_if_modified(|state| {
            if state.is_loading() {
                return false;
            }
            *state = RegistrationState::Loading;
            true
        })
    }

    async fn run(&self, address: Address) -> Result<PushToken, FlowError> {
        let token = self.tokens.fetch_token().await.map_err(|e| {
            tracing::debug!(detail = e.detail(), "Token fetch failed");
            e
        })?;

        let request = RegistrationRequest::new(address, token);
        let receipt = self.api.register(&request).await.map_err(|e| {
            tracing::debug!(detail = e.detail(), "Backend registration failed");
            e
        })?;
        tracing::debug!(status = receipt.status, body = %receipt.body, "Backend accepted registration");

        Ok(request.token)
    }
}
