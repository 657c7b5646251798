// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Push registration: associate a device push token with a wallet address
//!
//! This crate fetches a push token from a messaging service and registers
//! it, together with a user-supplied address, on a notification backend.

pub mod config;
pub mod error;
pub mod flow;
pub mod models;
pub mod screen;
pub mod services;

pub use flow::RegistrationFlow;
pub use screen::RegistrationScreen;
