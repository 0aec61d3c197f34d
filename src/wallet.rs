// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// An account address as handed out by the wallet.
///
/// The value is opaque: it is stored and displayed exactly as the wallet
/// returned it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountAddress(String);

impl AccountAddress {
    /// Wraps an address string.
    pub fn new(address: impl Into<String>) -> Self {
        Self(address.into())
    }

    /// Returns the address string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AccountAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AccountAddress {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AccountAddress {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// How the wallet should be asked for accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationMode {
    /// Only report accounts the visitor authorized earlier. Never prompts.
    AlreadyAuthorized,
    /// Ask the visitor to authorize an account. May prompt.
    PromptUser,
}

impl AuthorizationMode {
    /// The EIP-1193 method implementing this mode.
    #[must_use]
    pub fn rpc_method(self) -> &'static str {
        match self {
            Self::AlreadyAuthorized => "eth_accounts",
            Self::PromptUser => "eth_requestAccounts",
        }
    }
}

/// Account discovery and authorization.
///
/// Implementations report a missing wallet as
/// [`PortalError::ProviderUnavailable`](crate::PortalError::ProviderUnavailable)
/// and a refused prompt as
/// [`PortalError::AuthorizationRejected`](crate::PortalError::AuthorizationRejected).
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Returns the accounts the wallet exposes under `mode`, in wallet order.
    async fn request_accounts(&self, mode: AuthorizationMode) -> Result<Vec<AccountAddress>>;
}

/// Whether `value` is a `0x`-prefixed 20-byte hex address.
#[must_use]
pub fn is_hex_address(value: &str) -> bool {
    value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .is_some_and(|hex| hex.len() == 40 && hex.bytes().all(|b| b.is_ascii_hexdigit()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_hex_addresses() {
        assert!(is_hex_address("0x80563D18d6A99f5c4D7ea18cF00A26aCF13156c8"));
        assert!(!is_hex_address("80563D18d6A99f5c4D7ea18cF00A26aCF13156c8"));
        assert!(!is_hex_address("0x80563D18"));
        assert!(!is_hex_address("0xZZ563D18d6A99f5c4D7ea18cF00A26aCF13156c8"));
    }

    #[test]
    fn maps_modes_to_rpc_methods() {
        assert_eq!(AuthorizationMode::AlreadyAuthorized.rpc_method(), "eth_accounts");
        assert_eq!(AuthorizationMode::PromptUser.rpc_method(), "eth_requestAccounts");
    }
}
