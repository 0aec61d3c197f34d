// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Page rendering.
//!
//! [`render`] is a pure function of the session; front-ends decide how to
//! draw the resulting [`Page`].

use serde::Serialize;

use crate::session::SessionState;

/// Page title.
pub const HEADER: &str = "Yo! 🍻";
/// Line under the title.
pub const BIO: &str = "I'm g-van.";
/// Label of the message input.
pub const PROMPT: &str = "Whats on your mind friend?";
/// Shown once a wave is mined.
pub const CONFIRMATION: &str = "Love you too gee.❤️";
/// Label of the connect action.
pub const CONNECT_WALLET: &str = "Connect Wallet";

/// One past wave as displayed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventCard {
    /// Sender address.
    pub address: String,
    /// Mined time, RFC 3339.
    pub time: String,
    /// Wave message.
    pub message: String,
}

/// Everything a front-end draws for one session state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    /// Page title.
    pub header: &'static str,
    /// Line under the title.
    pub bio: &'static str,
    /// Label of the message input.
    pub prompt: &'static str,
    /// Connected account, if any.
    pub account: Option<String>,
    /// A submission is being mined.
    pub spinner: bool,
    /// Confirmation message after a mined wave.
    pub confirmation: Option<&'static str>,
    /// Running wave count, shown with the confirmation.
    pub running_count: Option<u64>,
    /// Offer the connect action.
    pub connect_wallet: bool,
    /// Past waves, empty unless the list is visible.
    pub events: Vec<EventCard>,
    /// Non-blocking note about the last failed contract call.
    pub notice: Option<String>,
}

/// Renders the page for `state`.
#[must_use]
pub fn render(state: &SessionState) -> Page {
    let confirmed = state.last_submission_confirmed();

    let events = if state.events_visible() {
        state
            .events()
            .unwrap_or_default()
            .iter()
            .map(|event| EventCard {
                address: event.sender.to_string(),
                time: event.formatted_timestamp(),
                message: event.message.clone(),
            })
            .collect()
    } else {
        Vec::new()
    };

    Page {
        header: HEADER,
        bio: BIO,
        prompt: PROMPT,
        account: state.account().map(ToString::to_string),
        spinner: state.pending_submission(),
        confirmation: confirmed.then_some(CONFIRMATION),
        running_count: confirmed.then_some(state.total_count()),
        connect_wallet: state.account().is_none(),
        events,
        notice: state.last_failure().map(str::to_string),
    }
}
