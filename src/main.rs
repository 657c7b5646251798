// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Push registration CLI
//!
//! Registers this device's push token against a wallet address on the
//! notification backend.

use clap::{Parser, Subcommand};
use push_registration::{
    config::Config,
    flow::RegistrationFlow,
    screen::RegistrationScreen,
    services::{PermissionRequester, RegistrationClient, StaticMessaging, TokenProvider},
};
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "push-registration", version, about)]
struct Cli {
    /// Registration backend base URL (overrides REGISTRATION_ENDPOINT)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask for notification permission
    EnableNotifications,
    /// Register the device token for a wallet address
    Register {
        /// Wallet address
        #[arg(long, default_value = "")]
        address: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    init_logging();

    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(endpoint) = cli.endpoint {
        config.endpoint = endpoint;
    }
    tracing::info!(endpoint = %config.endpoint, "Starting push registration");

    let messaging = StaticMessaging::new(config.push_authorization, config.push_token.clone());
    let flow = RegistrationFlow::new(
        TokenProvider::new(Arc::new(messaging)),
        Arc::new(RegistrationClient::new(config.endpoint.clone())),
    );
    let permissions = PermissionRequester::new(config.permission_mode.into_prompt());
    let mut screen = RegistrationScreen::new(Arc::new(flow), permissions);

    let succeeded = match cli.command {
        Command::EnableNotifications => {
            screen.press_enable_notifications().await;
            screen
                .last_alert()
                .is_some_and(|a| a.level == push_registration::models::AlertLevel::Success)
        }
        Command::Register { address } => {
            screen.set_address(address);
            screen.press_register().await;
            screen.success_visible()
        }
    };

    print!("{}", screen.render());
    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Initialize structured logging on stderr. `LOG_FORMAT=pretty` for humans.
fn init_logging() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("push_registration=debug,info"));

    let pretty = std::env::var("LOG_FORMAT").is_ok_and(|v| v == "pretty");
    let registry = tracing_subscriber::registry().with(filter);

    if pretty {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
