// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! Session controller for the Wave Portal contract front-end.
//!
//! The crate holds the state of one visitor session and drives the calls a
//! page makes against two external collaborators: a [`WalletProvider`] that
//! discovers and authorizes accounts, and a [`ContractClient`] bound to the
//! deployed `WavePortal` contract. [`ViewController`] owns the
//! [`SessionState`] and [`render`] turns it into a [`Page`].
//!
//! With the default `rpc` feature, [`rpc`] provides `ethers`-backed
//! implementations of both collaborators.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unused_must_use)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![warn(missing_debug_implementations, unreachable_pub)]

/// Persistent portal configuration.
pub mod config;
/// The contract collaborator.
pub mod contract;
/// Session operations.
pub mod controller;
/// Error types.
pub mod error;
/// Wave events as shown to the visitor.
pub mod event;
/// Page rendering.
pub mod page;
/// `ethers`-backed collaborators.
#[cfg(feature = "rpc")]
pub mod rpc;
/// Session state.
pub mod session;
/// The wallet collaborator.
pub mod wallet;

pub use config::PortalConfig;
pub use contract::{Confirmation, ContractClient, PendingWave, RawWave};
pub use controller::{RestoreOutcome, ViewController};
pub use error::{PortalError, Result};
pub use event::WaveEvent;
pub use page::{render, EventCard, Page};
pub use session::{SessionState, SubmissionStatus};
pub use wallet::{AccountAddress, AuthorizationMode, WalletProvider};
