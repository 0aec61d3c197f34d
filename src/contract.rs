// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{error::Result, wallet::AccountAddress};

/// Address of the deployed `WavePortal` contract.
pub const WAVE_PORTAL_ADDRESS: &str = "0x80563D18d6A99f5c4D7ea18cF00A26aCF13156c8";

/// A wave as the contract stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawWave {
    /// Address that sent the wave.
    pub sender: String,
    /// Block timestamp, seconds since the Unix epoch.
    pub unix_timestamp_seconds: u64,
    /// Message attached to the wave.
    pub message: String,
}

/// Handle to a submitted wave transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingWave {
    /// Transaction hash.
    pub tx_hash: String,
}

/// A mined wave transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    /// Transaction hash.
    pub tx_hash: String,
    /// Block the transaction was included in, when the client reports it.
    pub block_number: Option<u64>,
}

/// Typed calls against the `WavePortal` contract.
///
/// None of the calls carry a timeout. A call that never resolves keeps the
/// caller suspended.
#[async_trait]
pub trait ContractClient: Send + Sync {
    /// `getTotalWaves()`.
    async fn read_total_count(&self) -> Result<u64>;

    /// `wave(message)`, signed by `from` when the session has an account.
    /// Returns once the transaction is accepted, before it is mined.
    async fn submit_wave(
        &self,
        from: Option<&AccountAddress>,
        message: Option<&str>,
    ) -> Result<PendingWave>;

    /// Suspends until `pending` is mined.
    async fn await_confirmation(&self, pending: &PendingWave) -> Result<Confirmation>;

    /// `getAllWaves()`, in emission order.
    async fn read_all_waves(&self) -> Result<Vec<RawWave>>;
}
