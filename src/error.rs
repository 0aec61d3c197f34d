// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PortalError>;

/// Failures reported by the session controller and its collaborators.
#[derive(Debug, Error)]
pub enum PortalError {
    /// No wallet is reachable.
    #[error("wallet provider unavailable: {0}")]
    ProviderUnavailable(String),

    /// The wallet refused to authorize an account.
    #[error("account authorization rejected: {0}")]
    AuthorizationRejected(String),

    /// The wallet authorized the request but returned no account.
    #[error("wallet returned no accounts")]
    NoAccounts,

    /// A read or write call against the contract failed.
    #[error("contract call failed: {0}")]
    Contract(String),

    /// A submitted transaction left the mempool without being mined.
    #[error("transaction {0} was dropped before confirmation")]
    TransactionDropped(String),

    /// An event carried a timestamp outside the representable range.
    #[error("invalid event timestamp: {0}")]
    InvalidTimestamp(u64),

    /// An address string is not a 20-byte hex address.
    #[error("invalid address '{0}'")]
    InvalidAddress(String),

    /// A configuration value is unusable.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error.
    #[error("TOML parse error: {0}")]
    TomlDecode(#[from] toml::de::Error),

    /// TOML encode error.
    #[error("TOML encode error: {0}")]
    TomlEncode(#[from] toml::ser::Error),
}

impl PortalError {
    /// Whether this failure means no wallet is present at all.
    ///
    /// Session restore treats this as an expected condition.
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::ProviderUnavailable(_))
    }
}
