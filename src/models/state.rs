// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Observable UI state and user-facing alerts.

use super::PushToken;
use crate::error::FlowError;

/// Registration screen state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RegistrationState {
    #[default]
    Idle,
    Loading,
    Registered(PushToken),
    Failed,
}

impl RegistrationState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RegistrationState::Loading)
    }

    /// Token to display once registered.
    pub fn token(&self) -> Option<&PushToken> {
        match self {
            RegistrationState::Registered(token) => Some(token),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertLevel {
    Success,
    Error,
}

/// A modal message surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
}

impl Alert {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: AlertLevel::Error,
            message: message.into(),
        }
    }

    pub fn title(&self) -> &'static str {
        match self.level {
            AlertLevel::Success => "Success",
            AlertLevel::Error => "Error",
        }
    }
}

impl std::fmt::Display for Alert {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title(), self.message)
    }
}

/// Outcome of one press of "Register Device".
#[derive(Debug)]
pub enum Submission {
    Registered(PushToken),
    Failed(FlowError),
    /// Trigger ignored because an attempt is already in flight.
    Busy,
}

impl Submission {
    /// Alert to show, if any. A busy trigger shows nothing.
    pub fn alert(&self) -> Option<Alert> {
        match self {
            Submission::Registered(_) => {
                Some(Alert::success("Successfully registered for notifications!"))
            }
            Submission::Failed(err) => Some(err.alert()),
            Submission::Busy => None,
        }
    }

    pub fn is_registered(&self) -> bool {
        matches!(self, Submission::Registered(_))
    }
}
