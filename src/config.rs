// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is read first if present.

use crate::services::{AuthorizationStatus, PromptMode, DEFAULT_ENDPOINT};
use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Registration backend base URL
    pub endpoint: String,
    /// Device token provisioned for this installation
    pub push_token: Option<String>,
    /// Authorization the messaging service reports
    pub push_authorization: AuthorizationStatus,
    /// How the notification permission is answered
    pub permission_mode: PromptMode,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            push_token: None,
            push_authorization: AuthorizationStatus::Authorized,
            permission_mode: PromptMode::Prompt,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint = lookup("REGISTRATION_ENDPOINT")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(ConfigError::Invalid("REGISTRATION_ENDPOINT", endpoint));
        }

        let push_token = lookup("PUSH_TOKEN")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());

        let push_authorization = match lookup("PUSH_AUTHORIZATION") {
            Some(v) => v
                .parse()
                .map_err(|_| ConfigError::Invalid("PUSH_AUTHORIZATION", v))?,
            None => AuthorizationStatus::Authorized,
        };

        let permission_mode = match lookup("NOTIFICATION_PERMISSION") {
            Some(v) => v
                .parse()
                .map_err(|_| ConfigError::Invalid("NOTIFICATION_PERMISSION", v))?,
            None => PromptMode::Prompt,
        };

        Ok(Self {
            endpoint,
            push_token,
            push_authorization,
            permission_mode,
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    Invalid(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::from_vars(vars(&[])).expect("Config should load");

        assert_eq!(config.endpoint, "http://192.168.1.3:8080");
        assert_eq!(config.push_token, None);
        assert_eq!(config.push_authorization, AuthorizationStatus::Authorized);
        assert_eq!(config.permission_mode, PromptMode::Prompt);
    }

    #[test]
    fn test_config_from_vars() {
        let config = Config::from_vars(vars(&[
            ("REGISTRATION_ENDPOINT", "https://push.example.com"),
            ("PUSH_TOKEN", " tok_123 "),
            ("PUSH_AUTHORIZATION", "denied"),
            ("NOTIFICATION_PERMISSION", "granted"),
        ]))
        .expect("Config should load");

        assert_eq!(config.endpoint, "https://push.example.com");
        assert_eq!(config.push_token.as_deref(), Some("tok_123"));
        assert_eq!(config.push_authorization, AuthorizationStatus::Denied);
        assert_eq!(config.permission_mode, PromptMode::Granted);
    }

    #[test]
    fn test_config_rejects_bad_values() {
        let err = Config::from_vars(vars(&[("PUSH_AUTHORIZATION", "sometimes")])).unwrap_err();
        assert!(err.to_string().contains("PUSH_AUTHORIZATION"));

        let err = Config::from_vars(vars(&[("REGISTRATION_ENDPOINT", "ftp://x")])).unwrap_err();
        assert!(err.to_string().contains("REGISTRATION_ENDPOINT"));
    }
}
