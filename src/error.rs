// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for the registration flow.
//!
//! Every failure a user can hit is collapsed into one of three coarse
//! errors. Callers only ever show a generic alert; the structured
//! [`FailureKind`] is carried along for logs.

use crate::models::Alert;

/// Diagnostic cause of a failed attempt. Never shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    PermissionDenied,
    RegistrationRejected,
    TokenUnavailable,
    NetworkError,
    ServerRejected,
    InvalidResponse,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::PermissionDenied => "permission_denied",
            FailureKind::RegistrationRejected => "registration_rejected",
            FailureKind::TokenUnavailable => "token_unavailable",
            FailureKind::NetworkError => "network_error",
            FailureKind::ServerRejected => "server_rejected",
            FailureKind::InvalidResponse => "invalid_response",
        }
    }
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Address failed validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Please enter a valid address")]
pub struct ValidationError;

/// Any failure while obtaining a push token from the messaging service.
#[derive(Debug, thiserror::Error)]
#[error("Failed to get token")]
pub struct TokenFetchError {
    kind: FailureKind,
    detail: String,
}

impl TokenFetchError {
    pub fn new(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

/// Any failure while sending the registration to the backend.
#[derive(Debug, thiserror::Error)]
#[error("Failed to register token")]
pub struct RegistrationError {
    kind: FailureKind,
    detail: String,
}

impl RegistrationError {
    pub fn new(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self {
            kind,
            detail: detail.into(),
        }
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

/// Errors from the messaging service capability.
#[derive(Debug, thiserror::Error)]
pub enum MessagingError {
    #[error("Messaging service unreachable: {0}")]
    Unreachable(String),

    #[error("Device registration rejected: {0}")]
    Rejected(String),

    #[error("No token available")]
    NoToken,
}

/// Failure of the standalone "enable notifications" action.
#[derive(Debug, thiserror::Error)]
pub enum PermissionError {
    #[error("Notification permission denied")]
    Denied,

    #[error("Permission subsystem error: {0}")]
    Subsystem(String),
}

impl PermissionError {
    pub fn alert(&self) -> Alert {
        Alert::error("Failed to request permission")
    }
}

/// Everything a registration attempt can fail with.
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    TokenFetch(#[from] TokenFetchError),

    #[error(transparent)]
    Registration(#[from] RegistrationError),
}

impl FlowError {
    /// Diagnostic cause, if the failure came from a collaborator.
    pub fn kind(&self) -> Option<FailureKind> {
        match self {
            FlowError::Validation(_) => None,
            FlowError::TokenFetch(e) => Some(e.kind()),
            FlowError::Registration(e) => Some(e.kind()),
        }
    }

    /// The alert shown to the user. Collaborator failures all read the same.
    pub fn alert(&self) -> Alert {
        match self {
            FlowError::Validation(e) => Alert::error(e.to_string()),
            FlowError::TokenFetch(_) | FlowError::Registration(_) => {
                Alert::error("Failed to register token")
            }
        }
    }
}

/// Result type alias for flow operations
pub type Result<T> = std::result::Result<T, FlowError>;
