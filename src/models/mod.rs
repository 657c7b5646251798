// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the registration flow.

pub mod registration;
pub mod state;

pub use registration::{Address, PushToken, RegistrationReceipt, RegistrationRequest};
pub use state::{Alert, AlertLevel, RegistrationState, Submission};
