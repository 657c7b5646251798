// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Address, token and the request that pairs them.

use crate::error::ValidationError;
use serde::Serialize;

/// Wallet address entered by the user.
///
/// Opaque to this crate; the only check is that it is not empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Validate raw input. Kept exactly as entered.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.is_empty() {
            return Err(ValidationError);
        }
        Ok(Self(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque device token issued by the push messaging service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PushToken(String);

impl PushToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PushToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Body of `POST /registerTokenForAddress`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistrationRequest {
    pub address: Address,
    pub token: PushToken,
}

impl RegistrationRequest {
    pub fn new(address: Address, token: PushToken) -> Self {
        Self { address, token }
    }
}

/// Successful backend response. The body is kept as-is and not interpreted.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationReceipt {
    pub status: u16,
    pub body: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_rejects_empty() {
        assert_eq!(Address::parse(""), Err(ValidationError));
    }

    #[test]
    fn test_address_kept_as_entered() {
        let address = Address::parse("  7sX...abc ").unwrap();
        assert_eq!(address.as_str(), "  7sX...abc ");

        let address = Address::parse("   ").unwrap();
        assert_eq!(address.as_str(), "   ");
    }

    #[test]
    fn test_request_serializes_flat() {
        let request = RegistrationRequest::new(
            Address::parse("7sX...abc").unwrap(),
            PushToken::new("tok_123"),
        );
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "address": "7sX...abc", "token": "tok_123" })
        );
    }
}
