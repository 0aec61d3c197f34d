// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use serde::Serialize;

use crate::{event::WaveEvent, wallet::AccountAddress};

/// Where the most recent wave submission stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionStatus {
    /// Nothing submitted, or the last submission failed.
    #[default]
    Idle,
    /// Submitted and waiting to be mined.
    Pending,
    /// The last submission was mined.
    Confirmed,
}

/// State of one visitor session.
///
/// Created empty at start, mutated by the controller, never persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionState {
    account: Option<AccountAddress>,
    submission: SubmissionStatus,
    total_count: u64,
    events: Option<Vec<WaveEvent>>,
    events_visible: bool,
    last_failure: Option<String>,
}

impl SessionState {
    /// An empty session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The connected account, if any.
    #[must_use]
    pub fn account(&self) -> Option<&AccountAddress> {
        self.account.as_ref()
    }

    /// Status of the most recent submission.
    #[must_use]
    pub fn submission(&self) -> SubmissionStatus {
        self.submission
    }

    /// A submission is waiting to be mined.
    #[must_use]
    pub fn pending_submission(&self) -> bool {
        self.submission == SubmissionStatus::Pending
    }

    /// The most recent submission was mined.
    #[must_use]
    pub fn last_submission_confirmed(&self) -> bool {
        self.submission == SubmissionStatus::Confirmed
    }

    /// Wave count as last reported by the contract.
    #[must_use]
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Past waves from the last log refresh.
    #[must_use]
    pub fn events(&self) -> Option<&[WaveEvent]> {
        self.events.as_deref()
    }

    /// Whether the event list is shown.
    #[must_use]
    pub fn events_visible(&self) -> bool {
        self.events_visible
    }

    /// The most recent contract failure, if it has not been superseded.
    #[must_use]
    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    // The account is set once per session.
    pub(crate) fn set_account(&mut self, account: AccountAddress) {
        if self.account.is_none() {
            self.account = Some(account);
        }
    }

    pub(crate) fn set_submission(&mut self, status: SubmissionStatus) {
        self.submission = status;
    }

    pub(crate) fn replace_total_count(&mut self, count: u64) {
        self.total_count = count;
    }

    pub(crate) fn replace_events(&mut self, events: Vec<WaveEvent>) {
        self.events = Some(events);
    }

    pub(crate) fn toggle_events_visible(&mut self) {
        self.events_visible = !self.events_visible;
    }

    pub(crate) fn record_failure(&mut self, failure: impl Into<String>) {
        self.last_failure = Some(failure.into());
    }

    pub(crate) fn clear_failure(&mut self) {
        self.last_failure = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let state = SessionState::new();
        assert!(state.account().is_none());
        assert!(!state.pending_submission());
        assert!(!state.last_submission_confirmed());
        assert_eq!(state.total_count(), 0);
        assert!(state.events().is_none());
        assert!(!state.events_visible());
    }

    #[test]
    fn pending_and_confirmed_are_exclusive() {
        let mut state = SessionState::new();
        for status in [
            SubmissionStatus::Pending,
            SubmissionStatus::Confirmed,
            SubmissionStatus::Idle,
        ] {
            state.set_submission(status);
            assert!(!(state.pending_submission() && state.last_submission_confirmed()));
        }
    }

    #[test]
    fn account_is_set_once() {
        let mut state = SessionState::new();
        state.set_account("0xA".into());
        state.set_account("0xB".into());
        assert_eq!(state.account().map(AccountAddress::as_str), Some("0xA"));
    }
}
