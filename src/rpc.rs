// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Collaborators backed by an EIP-1193 style JSON-RPC endpoint.
//!
//! ABI encoding, signing and receipt polling are left to `ethers`.

use std::sync::Arc;

use async_trait::async_trait;
use ethers::{
    providers::{Http, Middleware, PendingTransaction, Provider, ProviderError, RpcError},
    types::{Address, TxHash, U256},
};
use tracing::debug;

use crate::{
    config::PortalConfig,
    contract::{Confirmation, ContractClient, PendingWave, RawWave},
    error::{PortalError, Result},
    wallet::{AccountAddress, AuthorizationMode, WalletProvider},
};

#[allow(missing_docs, clippy::all, clippy::pedantic)]
mod bindings {
    ethers::contract::abigen!(WavePortal, "./abi/WavePortal.json");
}

use bindings::WavePortal;

fn http_provider(config: &PortalConfig) -> Result<Provider<Http>> {
    let provider = Provider::<Http>::try_from(config.rpc_url.as_str())
        .map_err(|err| PortalError::Config(format!("invalid rpc_url '{}': {err}", config.rpc_url)))?;
    Ok(provider.interval(config.poll_interval()))
}

fn parse_address(value: &str) -> Result<Address> {
    value
        .parse::<Address>()
        .map_err(|_| PortalError::InvalidAddress(value.to_string()))
}

fn format_address(address: Address) -> String {
    format!("{address:#x}")
}

fn contract_error(err: impl std::fmt::Display) -> PortalError {
    PortalError::Contract(err.to_string())
}

fn to_u64(value: U256, what: &str) -> Result<u64> {
    u64::try_from(value).map_err(|_| PortalError::Contract(format!("{what} {value} exceeds u64")))
}

/// Wallet reached through `eth_accounts` and `eth_requestAccounts`.
#[derive(Debug, Clone)]
pub struct RpcWallet {
    provider: Provider<Http>,
}

impl RpcWallet {
    /// A wallet at the configured endpoint. Does not touch the network.
    ///
    /// # Errors
    ///
    /// Fails when the endpoint URL cannot be parsed.
    pub fn new(config: &PortalConfig) -> Result<Self> {
        Ok(Self {
            provider: http_provider(config)?,
        })
    }

    fn classify(mode: AuthorizationMode, err: &ProviderError) -> PortalError {
        match (mode, err.as_error_response()) {
            (AuthorizationMode::PromptUser, Some(response)) => {
                PortalError::AuthorizationRejected(response.message.clone())
            }
            _ => PortalError::ProviderUnavailable(err.to_string()),
        }
    }
}

#[async_trait]
impl WalletProvider for RpcWallet {
    async fn request_accounts(&self, mode: AuthorizationMode) -> Result<Vec<AccountAddress>> {
        let accounts: Vec<Address> = self
            .provider
            .request(mode.rpc_method(), ())
            .await
            .map_err(|err| Self::classify(mode, &err))?;

        Ok(accounts
            .into_iter()
            .map(|address| AccountAddress::new(format_address(address)))
            .collect())
    }
}

/// The `WavePortal` contract at the configured address.
///
/// Writes are sent from the session account. Without one they fall back to
/// the first account the endpoint exposes.
#[derive(Debug, Clone)]
pub struct RpcWavePortal {
    provider: Provider<Http>,
    address: Address,
}

impl RpcWavePortal {
    /// A client for the configured contract. Does not touch the network.
    ///
    /// # Errors
    ///
    /// Fails when the endpoint URL or the contract address is invalid.
    pub fn new(config: &PortalConfig) -> Result<Self> {
        Ok(Self {
            provider: http_provider(config)?,
            address: parse_address(&config.contract_address)?,
        })
    }

    /// Contract address.
    #[must_use]
    pub fn address(&self) -> String {
        format_address(self.address)
    }

    fn reader(&self) -> WavePortal<Provider<Http>> {
        WavePortal::new(self.address, Arc::new(self.provider.clone()))
    }

    async fn writer(&self, from: Option<&AccountAddress>) -> Result<WavePortal<Provider<Http>>> {
        let sender = match from {
            Some(account) => parse_address(account.as_str())?,
            None => {
                let accounts = self.provider.get_accounts().await.map_err(contract_error)?;
                accounts.first().copied().ok_or(PortalError::NoAccounts)?
            }
        };
        debug!("Sending from {}", format_address(sender));

        let provider = self.provider.clone().with_sender(sender);
        Ok(WavePortal::new(self.address, Arc::new(provider)))
    }
}

#[async_trait]
impl ContractClient for RpcWavePortal {
    async fn read_total_count(&self) -> Result<u64> {
        let count = self
            .reader()
            .get_total_waves()
            .call()
            .await
            .map_err(contract_error)?;
        to_u64(count, "wave count")
    }

    async fn submit_wave(
        &self,
        from: Option<&AccountAddress>,
        message: Option<&str>,
    ) -> Result<PendingWave> {
        let contract = self.writer(from).await?;
        let call = contract.wave(message.unwrap_or_default().to_string());
        let pending = call.send().await.map_err(contract_error)?;
        let tx_hash: TxHash = *pending;

        Ok(PendingWave {
            tx_hash: format!("{tx_hash:#x}"),
        })
    }

    async fn await_confirmation(&self, pending: &PendingWave) -> Result<Confirmation> {
        let tx_hash = pending.tx_hash.parse::<TxHash>().map_err(|_| {
            PortalError::Contract(format!("invalid transaction hash '{}'", pending.tx_hash))
        })?;

        let receipt = PendingTransaction::new(tx_hash, &self.provider)
            .await
            .map_err(contract_error)?
            .ok_or_else(|| PortalError::TransactionDropped(pending.tx_hash.clone()))?;

        Ok(Confirmation {
            tx_hash: pending.tx_hash.clone(),
            block_number: receipt.block_number.map(|number| number.as_u64()),
        })
    }

    async fn read_all_waves(&self) -> Result<Vec<RawWave>> {
        let waves = self
            .reader()
            .get_all_waves()
            .call()
            .await
            .map_err(contract_error)?;

        waves
            .into_iter()
            .map(|wave| {
                Ok(RawWave {
                    sender: format_address(wave.waver),
                    unix_timestamp_seconds: to_u64(wave.timestamp, "timestamp")?,
                    message: wave.message,
                })
            })
            .collect()
    }
}

/// Both collaborators for one endpoint.
///
/// # Errors
///
/// Fails when the configuration is invalid.
pub fn connect(config: &PortalConfig) -> Result<(RpcWallet, RpcWavePortal)> {
    config.validate()?;
    Ok((RpcWallet::new(config)?, RpcWavePortal::new(config)?))
}

#[cfg(test)]
mod tests {
    use ethers::providers::{HttpClientError, JsonRpcError};

    use super::*;

    fn json_rpc_failure(code: i64, message: &str) -> ProviderError {
        ProviderError::JsonRpcClientError(Box::new(HttpClientError::JsonRpcError(JsonRpcError {
            code,
            message: message.to_string(),
            data: None,
        })))
    }

    #[test]
    fn refused_prompt_is_a_rejection() {
        let err = json_rpc_failure(4001, "User rejected the request.");
        let classified = RpcWallet::classify(AuthorizationMode::PromptUser, &err);
        assert!(
            matches!(&classified, PortalError::AuthorizationRejected(reason) if reason == "User rejected the request.")
        );
        assert!(!classified.is_unavailable());
    }

    #[test]
    fn failed_account_lookup_means_no_wallet() {
        let err = json_rpc_failure(4100, "Unauthorized");
        let classified = RpcWallet::classify(AuthorizationMode::AlreadyAuthorized, &err);
        assert!(classified.is_unavailable());
    }

    #[test]
    fn transport_failure_means_no_wallet() {
        let err = ProviderError::CustomError("connection refused".to_string());
        for mode in [AuthorizationMode::AlreadyAuthorized, AuthorizationMode::PromptUser] {
            let classified = RpcWallet::classify(mode, &err);
            assert!(
                matches!(&classified, PortalError::ProviderUnavailable(reason) if reason.contains("connection refused"))
            );
        }
    }

    #[test]
    fn session_account_must_be_a_hex_address() {
        let sender = parse_address("0x80563D18d6A99f5c4D7ea18cF00A26aCF13156c8").expect("valid");
        assert_eq!(
            format_address(sender),
            "0x80563d18d6a99f5c4d7ea18cf00a26acf13156c8"
        );

        let err = parse_address("0xABC...").expect_err("not an address");
        assert!(matches!(err, PortalError::InvalidAddress(value) if value == "0xABC..."));
    }

    #[test]
    fn builds_clients_from_defaults() {
        let (_, contract) = connect(&PortalConfig::default()).expect("valid defaults");
        assert_eq!(
            contract.address(),
            "0x80563d18d6a99f5c4d7ea18cf00a26acf13156c8"
        );
    }

    #[test]
    fn rejects_unparsable_endpoint() {
        let config = PortalConfig {
            rpc_url: "http://".to_string(),
            ..PortalConfig::default()
        };
        let err = RpcWallet::new(&config).expect_err("invalid url");
        assert!(matches!(err, PortalError::Config(_)));
    }

    #[test]
    fn formats_addresses_as_full_lowercase_hex() {
        assert_eq!(
            format_address(Address::zero()),
            "0x0000000000000000000000000000000000000000"
        );
    }
}
