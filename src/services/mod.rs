// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - collaborators of the registration flow.

pub mod messaging;
pub mod permission;
pub mod registration;

pub use messaging::{AuthorizationStatus, MessagingService, StaticMessaging, TokenProvider};
pub use permission::{
    ConsolePrompt, FixedPrompt, Permission, PermissionPrompt, PermissionRequester,
    PermissionStatus, PromptMode,
};
pub use registration::{RegistrationApi, RegistrationClient, DEFAULT_ENDPOINT};
