// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Notification permission, requested through the platform's permission
//! subsystem. A grant outlives this process.

use crate::error::PermissionError;
use crate::models::Alert;
use async_trait::async_trait;
use std::io::{BufRead, Write};
use std::str::FromStr;
use std::sync::{Arc, Mutex};

/// Permissions this crate asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    PostNotifications,
}

impl Permission {
    pub fn id(&self) -> &'static str {
        match self {
            Permission::PostNotifications => "android.permission.POST_NOTIFICATIONS",
        }
    }
}

/// Answer from the permission subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
    NeverAskAgain,
}

/// Platform permission subsystem.
#[async_trait]
pub trait PermissionPrompt: Send + Sync {
    async fn request(&self, permission: Permission) -> Result<PermissionStatus, PermissionError>;
}

/// Prompt that always returns the same answer.
#[derive(Debug, Clone, Copy)]
pub struct FixedPrompt(pub PermissionStatus);

#[async_trait]
impl PermissionPrompt for FixedPrompt {
    async fn request(&self, _permission: Permission) -> Result<PermissionStatus, PermissionError> {
        Ok(self.0)
    }
}

/// Asks the user on a terminal. Anything but `y`/`yes` is a denial.
///
/// Terminal I/O blocks, so each request runs on tokio's blocking pool.
pub struct ConsolePrompt<R, W> {
    io: Arc<Mutex<(R, W)>>,
}

impl<R, W> ConsolePrompt<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            io: Arc::new(Mutex::new((reader, writer))),
        }
    }
}

impl ConsolePrompt<std::io::BufReader<std::io::Stdin>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::BufReader::new(std::io::stdin()), std::io::stdout())
    }
}

#[async_trait]
impl<R, W> PermissionPrompt for ConsolePrompt<R, W>
where
    R: BufRead + Send + 'static,
    W: Write + Send + 'static,
{
    async fn request(&self, permission: Permission) -> Result<PermissionStatus, PermissionError> {
        let io = self.io.clone();
        tokio::task::spawn_blocking(move || ask(&io, permission))
            .await
            .map_err(|e| PermissionError::Subsystem(format!("prompt task failed: {}", e)))?
    }
}

fn ask<R: BufRead, W: Write>(
    io: &Mutex<(R, W)>,
    permission: Permission,
) -> Result<PermissionStatus, PermissionError> {
    let mut guard = io
        .lock()
        .map_err(|_| PermissionError::Subsystem("prompt lock poisoned".to_string()))?;
    let (reader, writer) = &mut *guard;

    write!(writer, "Allow {} ? [y/N] ", permission.id())
        .and_then(|_| writer.flush())
        .map_err(|e| PermissionError::Subsystem(e.to_string()))?;

    let mut answer = String::new();
    reader
        .read_line(&mut answer)
        .map_err(|e| PermissionError::Subsystem(e.to_string()))?;

    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(PermissionStatus::Granted),
        _ => Ok(PermissionStatus::Denied),
    }
}

/// How the CLI answers permission requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptMode {
    Prompt,
    Granted,
    Denied,
}

impl PromptMode {
    pub fn into_prompt(self) -> Arc<dyn PermissionPrompt> {
        match self {
            PromptMode::Prompt => Arc::new(ConsolePrompt::stdio()),
            PromptMode::Granted => Arc::new(FixedPrompt(PermissionStatus::Granted)),
            PromptMode::Denied => Arc::new(FixedPrompt(PermissionStatus::Denied)),
        }
    }
}

impl FromStr for PromptMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prompt" => Ok(PromptMode::Prompt),
            "granted" => Ok(PromptMode::Granted),
            "denied" => Ok(PromptMode::Denied),
            other => Err(format!("unknown permission mode '{}'", other)),
        }
    }
}

/// Requests notification permission independently of registration.
#[derive(Clone)]
pub struct PermissionRequester {
    prompt: Arc<dyn PermissionPrompt>,
}

impl PermissionRequester {
    pub fn new(prompt: Arc<dyn PermissionPrompt>) -> Self {
        Self { prompt }
    }

    pub async fn request_permission(&self) -> Result<(), PermissionError> {
        let permission = Permission::PostNotifications;
        match self.prompt.request(permission).await? {
            PermissionStatus::Granted => {
                tracing::info!(permission = permission.id(), "Permission granted");
                Ok(())
            }
            status => {
                tracing::info!(permission = permission.id(), ?status, "Permission not granted");
                Err(PermissionError::Denied)
            }
        }
    }

    /// Run the request and turn the outcome into the alert to show.
    pub async fn request_with_alert(&self) -> Alert {
        match self.request_permission().await {
            Ok(()) => Alert::success("Notification permissions granted!"),
            Err(e) => {
                tracing::warn!(error = %e, "Permission request failed");
                e.alert()
            }
        }
    }
}
