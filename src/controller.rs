// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! The view controller.
//!
//! [`ViewController`] owns the [`SessionState`] and is the only thing that
//! mutates it. Every operation takes `&mut self`, so on one controller a
//! second operation cannot begin while another is suspended.
//!
//! Failure policy:
//! - a missing wallet during [`ViewController::restore_session`] is
//!   expected and only logged at debug level;
//! - a failed [`ViewController::connect`] is returned to the caller, which
//!   must show it to the visitor;
//! - contract failures are logged, recorded in
//!   [`SessionState::last_failure`] and returned. A failed submission goes
//!   back to [`SubmissionStatus::Idle`].

use tracing::{debug, warn};

use crate::{
    contract::{Confirmation, ContractClient, PendingWave},
    error::{PortalError, Result},
    event::from_raw_waves,
    session::{SessionState, SubmissionStatus},
    wallet::{AccountAddress, AuthorizationMode, WalletProvider},
};

/// What [`ViewController::restore_session`] found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RestoreOutcome {
    /// No wallet is present.
    NoWallet,
    /// A wallet is present but no account was authorized before.
    NoAuthorizedAccount,
    /// An earlier authorization was found.
    Restored {
        /// The restored account.
        account: AccountAddress,
        /// The wave count, unless the count query failed.
        total_count: Option<u64>,
    },
}

/// Drives one visitor session against a wallet and the wave contract.
#[derive(Debug)]
pub struct ViewController<W, C> {
    wallet: W,
    contract: C,
    state: SessionState,
}

impl<W, C> ViewController<W, C>
where
    W: WalletProvider,
    C: ContractClient,
{
    /// A controller with an empty session.
    pub fn new(wallet: W, contract: C) -> Self {
        Self {
            wallet,
            contract,
            state: SessionState::new(),
        }
    }

    /// Current session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The wallet collaborator.
    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    /// The contract collaborator.
    pub fn contract(&self) -> &C {
        &self.contract
    }

    /// Picks up an account the visitor authorized earlier.
    ///
    /// Never prompts and never fails: a missing wallet or a missing account
    /// leaves the session without an account. The count query runs only
    /// after an account was found.
    pub async fn restore_session(&mut self) -> RestoreOutcome {
        let accounts = match self
            .wallet
            .request_accounts(AuthorizationMode::AlreadyAuthorized)
            .await
        {
            Ok(accounts) => accounts,
            Err(err) if err.is_unavailable() => {
                debug!("Make sure you have a wallet: {err}");
                return RestoreOutcome::NoWallet;
            }
            Err(err) => {
                debug!("No authorized account found: {err}");
                return RestoreOutcome::NoAuthorizedAccount;
            }
        };

        let Some(account) = accounts.into_iter().next() else {
            debug!("No authorized account found");
            return RestoreOutcome::NoAuthorizedAccount;
        };

        debug!("Found an authorized account: {account}");
        self.state.set_account(account.clone());

        let total_count = self.refresh_total_count().await;
        RestoreOutcome::Restored {
            account,
            total_count,
        }
    }

    /// Asks the wallet to authorize an account.
    ///
    /// Returns the session account straight away if one is already set.
    ///
    /// # Errors
    ///
    /// Fails when no wallet is present, when the visitor rejects the
    /// prompt, or when the wallet authorizes nothing. The session keeps no
    /// account in each case. There is no retry.
    pub async fn connect(&mut self) -> Result<AccountAddress> {
        if let Some(account) = self.state.account() {
            return Ok(account.clone());
        }

        let accounts = self
            .wallet
            .request_accounts(AuthorizationMode::PromptUser)
            .await?;
        let account = accounts.into_iter().next().ok_or(PortalError::NoAccounts)?;

        debug!("Connected {account}");
        self.state.set_account(account.clone());
        Ok(account)
    }

    /// Sends a wave and waits for it to be mined, then re-reads the count.
    ///
    /// Same as [`ViewController::begin_wave`] followed by
    /// [`ViewController::finish_wave`]. No timeout applies: if the
    /// transaction is never mined the session stays pending.
    ///
    /// # Errors
    ///
    /// Fails when the write call is refused or the transaction is dropped;
    /// the session is back to [`SubmissionStatus::Idle`] afterwards. A
    /// failed count re-query after a mined wave is recorded but does not
    /// fail the submission.
    pub async fn submit_wave(&mut self, message: Option<&str>) -> Result<Confirmation> {
        let pending = self.begin_wave(message).await?;
        self.finish_wave(&pending).await
    }

    /// Sends a wave from the session account and returns once the write is
    /// accepted.
    ///
    /// The session is [`SubmissionStatus::Pending`] from before the write
    /// call and stays pending on success, so a front-end can draw the
    /// spinner before waiting in [`ViewController::finish_wave`].
    ///
    /// # Errors
    ///
    /// Fails when the write call is refused; the session is back to
    /// [`SubmissionStatus::Idle`].
    pub async fn begin_wave(&mut self, message: Option<&str>) -> Result<PendingWave> {
        self.state.clear_failure();
        self.state.set_submission(SubmissionStatus::Pending);

        let submitted = self
            .contract
            .submit_wave(self.state.account(), message)
            .await;
        match submitted {
            Ok(pending) => {
                debug!("Mining... {}", pending.tx_hash);
                Ok(pending)
            }
            Err(err) => Err(self.fail_submission(err)),
        }
    }

    /// Waits until `pending` is mined, then re-reads the count.
    ///
    /// # Errors
    ///
    /// Fails when the transaction is dropped; the session is back to
    /// [`SubmissionStatus::Idle`].
    pub async fn finish_wave(&mut self, pending: &PendingWave) -> Result<Confirmation> {
        let mined = self.contract.await_confirmation(pending).await;
        let confirmation = match mined {
            Ok(confirmation) => confirmation,
            Err(err) => return Err(self.fail_submission(err)),
        };
        debug!("Mined -- {}", confirmation.tx_hash);

        self.state.set_submission(SubmissionStatus::Confirmed);
        self.refresh_total_count().await;
        Ok(confirmation)
    }

    /// Reloads every past wave and flips the visibility of the list.
    ///
    /// Returns the number of waves loaded.
    ///
    /// # Errors
    ///
    /// Fails when the listing cannot be read or converted. The previous
    /// list and its visibility are kept.
    pub async fn refresh_event_log(&mut self) -> Result<usize> {
        match self.contract.read_all_waves().await.and_then(from_raw_waves) {
            Ok(events) => {
                let count = events.len();
                debug!("Retrieved {count} waves");
                self.state.replace_events(events);
                self.state.toggle_events_visible();
                self.state.clear_failure();
                Ok(count)
            }
            Err(err) => {
                warn!("Could not load waves: {err}");
                self.state.record_failure(err.to_string());
                Err(err)
            }
        }
    }

    fn fail_submission(&mut self, err: PortalError) -> PortalError {
        warn!("Wave failed: {err}");
        self.state.set_submission(SubmissionStatus::Idle);
        self.state.record_failure(err.to_string());
        err
    }

    async fn refresh_total_count(&mut self) -> Option<u64> {
        match self.contract.read_total_count().await {
            Ok(count) => {
                debug!("Retrieved total wave count... {count}");
                self.state.replace_total_count(count);
                Some(count)
            }
            Err(err) => {
                warn!("Could not read wave count: {err}");
                self.state.record_failure(err.to_string());
                None
            }
        }
    }
}
