// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! The registration screen: one address input, two actions, one success
//! indicator. Rendering is plain text.

use crate::flow::RegistrationFlow;
use crate::models::{Alert, RegistrationState};
use crate::services::PermissionRequester;
use std::fmt::Write;
use std::sync::Arc;

pub struct RegistrationScreen {
    flow: Arc<RegistrationFlow>,
    permissions: PermissionRequester,
    address: String,
    alerts: Vec<Alert>,
}

impl RegistrationScreen {
    pub fn new(flow: Arc<RegistrationFlow>, permissions: PermissionRequester) -> Self {
        Self {
            flow,
            permissions,
            address: String::new(),
            alerts: Vec::new(),
        }
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.address = address.into();
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn state(&self) -> RegistrationState {
        self.flow.state()
    }

    /// "Register Device" is disabled while an attempt is in flight.
    pub fn register_enabled(&self) -> bool {
        !self.flow.state().is_loading()
    }

    pub fn success_visible(&self) -> bool {
        matches!(self.flow.state(), RegistrationState::Registered(_))
    }

    pub fn displayed_token(&self) -> Option<String> {
        self.flow.state().token().map(|t| t.to_string())
    }

    /// Alerts raised so far, oldest first.
    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    pub fn last_alert(&self) -> Option<&Alert> {
        self.alerts.last()
    }

    /// "Enable Notifications" pressed.
    pub async fn press_enable_notifications(&mut self) {
        let alert = self.permissions.request_with_alert().await;
        self.alerts.push(alert);
    }

    /// "Register Device" pressed. Ignored while disabled.
    pub async fn press_register(&mut self) {
        if !self.register_enabled() {
            return;
        }
        let submission = self.flow.submit(&self.address).await;
        if let Some(alert) = submission.alert() {
            self.alerts.push(alert);
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "Notification Registration");
        let _ = writeln!(out, "Wallet Address: {}", self.address);

        let status = match self.flow.state() {
            RegistrationState::Idle => "idle",
            RegistrationState::Loading => "registering...",
            RegistrationState::Registered(_) => "registered",
            RegistrationState::Failed => "failed",
        };
        let _ = writeln!(out, "Status: {}", status);

        if let Some(token) = self.displayed_token() {
            let _ = writeln!(out, "Successfully Registered!");
            let _ = writeln!(out, "Token: {}", token);
        }
        for alert in &self.alerts {
            let _ = writeln!(out, "[{}]", alert);
        }
        out
    }
}
