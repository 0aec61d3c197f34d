// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::{
    contract::WAVE_PORTAL_ADDRESS,
    error::{PortalError, Result},
    wallet::is_hex_address,
};

/// Default JSON-RPC endpoint.
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";
/// Default config file location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "wave-portal.toml";

const DEFAULT_POLL_INTERVAL_MS: u64 = 7_000;

/// Where the portal talks to and which contract it targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortalConfig {
    /// JSON-RPC endpoint exposing the wallet and the chain.
    pub rpc_url: String,
    /// Address of the `WavePortal` contract.
    pub contract_address: String,
    /// How often the chain client polls for a receipt. Not a timeout.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_poll_interval_ms() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            contract_address: WAVE_PORTAL_ADDRESS.to_string(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl PortalConfig {
    /// Reads and validates a config file.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed, or holds invalid values.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`PortalConfig::load`], but a missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Fails when an existing file cannot be read, parsed or validated.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Writes the config as TOML, creating parent directories.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Checks that the endpoint and contract address are usable.
    ///
    /// # Errors
    ///
    /// Returns [`PortalError::Config`] for a non-HTTP endpoint or a zero
    /// poll interval, and [`PortalError::InvalidAddress`] for a malformed
    /// contract address.
    pub fn validate(&self) -> Result<()> {
        if !(self.rpc_url.starts_with("http://") || self.rpc_url.starts_with("https://")) {
            return Err(PortalError::Config(format!(
                "rpc_url must be an http(s) URL, got '{}'",
                self.rpc_url
            )));
        }
        if !is_hex_address(&self.contract_address) {
            return Err(PortalError::InvalidAddress(self.contract_address.clone()));
        }
        if self.poll_interval_ms == 0 {
            return Err(PortalError::Config(
                "poll_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Receipt polling cadence.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Default config path.
    #[must_use]
    pub fn default_path() -> PathBuf {
        PathBuf::from(DEFAULT_CONFIG_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_target_the_deployed_contract() {
        let config = PortalConfig::default();
        assert_eq!(config.contract_address, WAVE_PORTAL_ADDRESS);
        assert_eq!(config.rpc_url, DEFAULT_RPC_URL);
        config.validate().expect("defaults are valid");
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested/wave-portal.toml");
        let config = PortalConfig {
            rpc_url: "https://rpc.example.org".to_string(),
            poll_interval_ms: 250,
            ..PortalConfig::default()
        };

        config.save(&path).expect("save");
        assert_eq!(PortalConfig::load(&path).expect("load"), config);
    }

    #[test]
    fn missing_poll_interval_uses_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("wave-portal.toml");
        fs::write(
            &path,
            format!("rpc_url = \"{DEFAULT_RPC_URL}\"\ncontract_address = \"{WAVE_PORTAL_ADDRESS}\"\n"),
        )
        .expect("write");

        let config = PortalConfig::load(&path).expect("load");
        assert_eq!(config.poll_interval(), Duration::from_millis(7_000));
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config =
            PortalConfig::load_or_default(&dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(config, PortalConfig::default());
    }

    #[test]
    fn rejects_bad_contract_address() {
        let config = PortalConfig {
            contract_address: "0x1234".to_string(),
            ..PortalConfig::default()
        };
        let err = config.validate().expect_err("invalid address");
        assert!(matches!(err, PortalError::InvalidAddress(_)));
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let config = PortalConfig {
            rpc_url: "ws://127.0.0.1:8546".to_string(),
            ..PortalConfig::default()
        };
        let err = config.validate().expect_err("invalid endpoint");
        assert!(err.to_string().contains("http(s)"));
    }
}
