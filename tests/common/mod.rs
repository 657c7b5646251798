// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use async_trait::async_trait;
use axum::{http::StatusCode, routing::post, Json, Router};
use push_registration::error::{FailureKind, MessagingError, RegistrationError};
use push_registration::models::{RegistrationReceipt, RegistrationRequest};
use push_registration::services::{
    AuthorizationStatus, MessagingService, RegistrationApi, TokenProvider,
};
use push_registration::RegistrationFlow;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Token-fetch step a stub should fail at.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailAt {
    Authorize,
    Register,
    Token,
}

/// Messaging service double that counts each step.
#[derive(Default)]
pub struct StubMessaging {
    pub status: Option<AuthorizationStatus>,
    pub fail_at: Option<FailAt>,
    pub token: String,
    pub authorize_calls: AtomicUsize,
    pub register_calls: AtomicUsize,
    pub token_calls: AtomicUsize,
}

#[allow(dead_code)]
impl StubMessaging {
    pub fn with_token(token: &str) -> Self {
        Self {
            token: token.to_string(),
            ..Default::default()
        }
    }

    pub fn failing_at(step: FailAt) -> Self {
        Self {
            fail_at: Some(step),
            ..Self::with_token("tok_123")
        }
    }

    pub fn with_status(status: AuthorizationStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::with_token("tok_123")
        }
    }

    pub fn total_calls(&self) -> usize {
        self.authorize_calls.load(Ordering::SeqCst)
            + self.register_calls.load(Ordering::SeqCst)
            + self.token_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MessagingService for StubMessaging {
    async fn request_permission(&self) -> Result<AuthorizationStatus, MessagingError> {
        self.authorize_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_at == Some(FailAt::Authorize) {
            return Err(MessagingError::Unreachable("connection refused".to_string()));
        }
        Ok(self.status.unwrap_or(AuthorizationStatus::Authorized))
    }

    async fn register_device_for_remote_messages(&self) -> Result<(), MessagingError> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_at == Some(FailAt::Register) {
            return Err(MessagingError::Rejected("APNs unavailable".to_string()));
        }
        Ok(())
    }

    async fn get_token(&self) -> Result<String, MessagingError> {
        self.token_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_at == Some(FailAt::Token) {
            return Err(MessagingError::NoToken);
        }
        Ok(self.token.clone())
    }
}

/// Registration backend double.
#[derive(Default)]
pub struct StubApi {
    pub fail_with: Option<FailureKind>,
    pub gate: Option<Notify>,
    pub calls: AtomicUsize,
    pub last_request: Mutex<Option<RegistrationRequest>>,
}

#[allow(dead_code)]
impl StubApi {
    pub fn failing(kind: FailureKind) -> Self {
        Self {
            fail_with: Some(kind),
            ..Default::default()
        }
    }

    /// A backend that holds every call until `release` is called.
    pub fn gated() -> Self {
        Self {
            gate: Some(Notify::new()),
            ..Default::default()
        }
    }

    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_request(&self) -> Option<RegistrationRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl RegistrationApi for StubApi {
    async fn register(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationReceipt, RegistrationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        if let Some(kind) = self.fail_with {
            return Err(RegistrationError::new(kind, "stubbed failure"));
        }
        Ok(RegistrationReceipt {
            status: 200,
            body: serde_json::json!({ "ok": true }),
        })
    }
}

/// Build a flow over the given doubles.
#[allow(dead_code)]
pub fn flow_with(messaging: Arc<StubMessaging>, api: Arc<StubApi>) -> RegistrationFlow {
    RegistrationFlow::new(TokenProvider::new(messaging), api)
}

/// Stub registration backend on an ephemeral local port.
#[allow(dead_code)]
pub struct StubBackend {
    pub base_url: String,
    pub received: Arc<Mutex<Vec<serde_json::Value>>>,
}

#[allow(dead_code)]
impl StubBackend {
    pub fn received(&self) -> Vec<serde_json::Value> {
        self.received.lock().unwrap().clone()
    }
}

/// Serve `POST /registerTokenForAddress` answering with `status` and `body`.
///
/// The route only accepts `application/json` bodies.
#[allow(dead_code)]
pub async fn spawn_backend(status: StatusCode, body: &'static str) -> StubBackend {
    let received = Arc::new(Mutex::new(Vec::new()));
    let sink = received.clone();

    let app = Router::new().route(
        "/registerTokenForAddress",
        post(move |Json(payload): Json<serde_json::Value>| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push(payload);
                (
                    status,
                    [(axum::http::header::CONTENT_TYPE, "application/json")],
                    body,
                )
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub backend");
    let addr = listener.local_addr().expect("Stub backend has no address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Stub backend failed");
    });

    StubBackend {
        base_url: format!("http://{}", addr),
        received,
    }
}
