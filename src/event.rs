// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use serde::Serialize;
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use crate::{
    contract::RawWave,
    error::{PortalError, Result},
    wallet::AccountAddress,
};

/// A past wave, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WaveEvent {
    /// Address that sent the wave.
    pub sender: AccountAddress,
    /// When the wave was mined, in UTC.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// Message attached to the wave.
    pub message: String,
}

impl WaveEvent {
    /// Timestamp in RFC 3339 form.
    #[must_use]
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp
            .format(&Rfc3339)
            .unwrap_or_else(|_| self.timestamp.unix_timestamp().to_string())
    }
}

impl TryFrom<RawWave> for WaveEvent {
    type Error = PortalError;

    fn try_from(raw: RawWave) -> Result<Self> {
        let seconds = i64::try_from(raw.unix_timestamp_seconds)
            .map_err(|_| PortalError::InvalidTimestamp(raw.unix_timestamp_seconds))?;
        let timestamp = OffsetDateTime::from_unix_timestamp(seconds)
            .map_err(|_| PortalError::InvalidTimestamp(raw.unix_timestamp_seconds))?;

        Ok(Self {
            sender: AccountAddress::new(raw.sender),
            timestamp,
            message: raw.message,
        })
    }
}

/// Converts a contract listing, keeping emission order.
///
/// # Errors
///
/// Fails on the first wave whose timestamp cannot be represented.
pub fn from_raw_waves(raw: Vec<RawWave>) -> Result<Vec<WaveEvent>> {
    raw.into_iter().map(WaveEvent::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(sender: &str, seconds: u64, message: &str) -> RawWave {
        RawWave {
            sender: sender.to_string(),
            unix_timestamp_seconds: seconds,
            message: message.to_string(),
        }
    }

    #[test]
    fn converts_seconds_to_datetime() {
        let event = WaveEvent::try_from(raw("0xA", 1_650_000_000, "gm")).expect("valid");
        assert_eq!(event.timestamp.unix_timestamp(), 1_650_000_000);
        assert_eq!(event.formatted_timestamp(), "2022-04-15T05:20:00Z");
        assert_eq!(event.sender.as_str(), "0xA");
        assert_eq!(event.message, "gm");
    }

    #[test]
    fn rejects_out_of_range_timestamps() {
        let err = WaveEvent::try_from(raw("0xA", u64::MAX, "")).expect_err("out of range");
        assert!(matches!(err, PortalError::InvalidTimestamp(u64::MAX)));
    }

    #[test]
    fn keeps_listing_order() {
        let events = from_raw_waves(vec![raw("0xB", 20, "second"), raw("0xA", 10, "first")])
            .expect("valid");
        let messages: Vec<_> = events.iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, ["second", "first"]);
    }
}
