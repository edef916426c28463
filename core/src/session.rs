//! # Form Session State
//!
//! Everything the lookup form shows lives in one [`Session`] value. Each user
//! or network event maps to one transition method; none of them do I/O, so
//! the whole state machine is testable without a terminal or a server.
//!
//! ```text
//! Idle ──edit──▶ Invalid ──edit──▶ Idle
//!   │
//!   └─begin_lookup─▶ Requesting ──complete(Ok)──▶ Displaying ──edit/submit──▶ …
//!                         └──────complete(Err)──▶ ErrorDisplayed ──edit/submit──▶ …
//! ```

use ipterm_common::network::address::{self, ValidationError};
use ipterm_common::network::record::LookupRecord;

use crate::lookup::LookupError;

/// Value the progress counter starts from when a request is issued.
pub const COUNTDOWN_START: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Invalid,
    Requesting,
    Displaying,
    ErrorDisplayed,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    address: String,
    validation_error: Option<ValidationError>,
    record: Option<LookupRecord>,
    request_error: Option<String>,
    busy: bool,
    countdown: u8,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn validation_error(&self) -> Option<ValidationError> {
        self.validation_error
    }

    pub fn record(&self) -> Option<&LookupRecord> {
        self.record.as_ref()
    }

    pub fn request_error(&self) -> Option<&str> {
        self.request_error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn countdown(&self) -> u8 {
        self.countdown
    }

    /// Replaces the input text and re-validates it.
    ///
    /// Outside a request this also dismisses the previous result or error
    /// banner, putting the form back to idle.
    pub fn edit(&mut self, value: impl Into<String>) {
        self.address = value.into();
        self.validation_error = address::validate(&self.address).err();

        if !self.busy {
            self.record = None;
            self.request_error = None;
        }
    }

    /// Whether pressing submit would issue a request right now.
    pub fn can_submit(&self) -> bool {
        !self.busy && self.validation_error.is_none() && !self.address.is_empty()
    }

    /// Starts a request for the current address.
    ///
    /// Returns the address to look up, or `None` when a request is already
    /// in flight or the address fails validation. Validation always runs
    /// again here so a stale verdict can never reach the network.
    pub fn begin_lookup(&mut self) -> Option<String> {
        if self.busy {
            return None;
        }

        if let Err(err) = address::validate(&self.address) {
            self.validation_error = Some(err);
            self.record = None;
            self.request_error = None;
            return None;
        }

        self.validation_error = None;
        self.record = None;
        self.request_error = None;
        self.busy = true;
        self.countdown = COUNTDOWN_START;
        Some(self.address.clone())
    }

    /// One second of the progress counter has elapsed.
    pub fn tick(&mut self) {
        if self.busy {
            self.countdown = self.countdown.saturating_sub(1);
        }
    }

    /// Records how the in-flight request ended. Busy flag and counter are
    /// reset on every path.
    pub fn complete(&mut self, outcome: Result<LookupRecord, LookupError>) {
        match outcome {
            Ok(record) => {
                self.record = Some(record);
                self.request_error = None;
            }
            Err(err) => {
                self.record = None;
                self.request_error = Some(err.user_message());
            }
        }
        self.busy = false;
        self.countdown = 0;
    }

    /// Leaves the busy state without an outcome, for a request whose
    /// future was dropped before it resolved.
    pub(crate) fn abandon(&mut self) {
        self.busy = false;
        self.countdown = 0;
    }

    pub fn phase(&self) -> Phase {
        if self.busy {
            Phase::Requesting
        } else if self.request_error.is_some() {
            Phase::ErrorDisplayed
        } else if self.record.is_some() {
            Phase::Displaying
        } else if self.validation_error.is_some() {
            Phase::Invalid
        } else {
            Phase::Idle
        }
    }
}
