//! # Lookup Controller
//!
//! Owns the form [`Session`] and the [`GeoLookup`] collaborator and runs the
//! submit flow: validate, issue exactly one request, count down while it is
//! in flight, then record the outcome.
//!
//! Interactive front ends drive the flow step by step with [`LookupController::begin`],
//! [`PendingLookup::next_event`] and [`LookupController::finish`] so they can
//! keep handling input while a request runs. One-shot callers use
//! [`LookupController::submit`].

use std::future::{self, Future};
use std::pin::Pin;
use std::sync::Arc;

use ipterm_common::info;
use ipterm_common::network::record::LookupRecord;
use tracing::debug;

use crate::countdown::Countdown;
use crate::lookup::{GeoLookup, LookupError};
use crate::session::{Phase, Session};

type LookupFuture = Pin<Box<dyn Future<Output = Result<LookupRecord, LookupError>> + Send>>;

#[derive(Debug)]
pub enum LookupEvent {
    /// The progress counter dropped to the given value.
    Tick(u8),
    Finished(Result<LookupRecord, LookupError>),
}

/// The single in-flight request together with its countdown.
///
/// Dropping it stops the countdown.
pub struct PendingLookup {
    request: Option<LookupFuture>,
    countdown: Countdown,
}

impl PendingLookup {
    /// Waits for the next countdown tick or the request's outcome. After
    /// [`LookupEvent::Finished`] has been returned this never resolves again.
    pub async fn next_event(&mut self) -> LookupEvent {
        let Some(request) = self.request.as_mut() else {
            return future::pending().await;
        };

        let event = tokio::select! {
            biased;
            outcome = request => LookupEvent::Finished(outcome),
            Some(left) = self.countdown.next_tick() => LookupEvent::Tick(left),
        };

        if matches!(event, LookupEvent::Finished(_)) {
            self.request = None;
        }
        event
    }
}

pub struct LookupController {
    session: Session,
    lookup: Arc<dyn GeoLookup>,
}

impl LookupController {
    pub fn new(lookup: Arc<dyn GeoLookup>) -> Self {
        Self {
            session: Session::new(),
            lookup,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn edit(&mut self, value: impl Into<String>) {
        self.session.edit(value);
    }

    /// Issues the request for the current address, or returns `None` when
    /// submission is disabled (busy, empty or invalid input).
    pub fn begin(&mut self) -> Option<PendingLookup> {
        let address = self.session.begin_lookup()?;
        info!("Looking up {} via {}", address, self.lookup.name());

        let lookup = Arc::clone(&self.lookup);
        let request: LookupFuture = Box::pin(async move { lookup.lookup(&address).await });

        Some(PendingLookup {
            request: Some(request),
            countdown: Countdown::start(self.session.countdown()),
        })
    }

    pub fn tick(&mut self) {
        self.session.tick();
    }

    pub fn finish(&mut self, outcome: Result<LookupRecord, LookupError>) {
        complete(&mut self.session, outcome);
    }

    /// Runs one complete submission and returns the phase it ended in.
    ///
    /// `on_tick` sees every countdown value. If this future is dropped before
    /// the request resolves, the session still leaves the busy state.
    pub async fn submit<F>(&mut self, mut on_tick: F) -> Phase
    where
        F: FnMut(u8),
    {
        let Some(mut pending) = self.begin() else {
            return self.session.phase();
        };

        let mut guard = BusyGuard {
            session: &mut self.session,
        };

        let outcome = loop {
            match pending.next_event().await {
                LookupEvent::Tick(left) => {
                    guard.session.tick();
                    on_tick(left);
                }
                LookupEvent::Finished(outcome) => break outcome,
            }
        };
        drop(pending);

        complete(guard.session, outcome);
        guard.session.phase()
    }
}

fn complete(session: &mut Session, outcome: Result<LookupRecord, LookupError>) {
    if let Err(err) = &outcome {
        debug!("Lookup failed: {}", err);
    }
    session.complete(outcome);
}

/// Clears the busy state if a submission is abandoned mid-flight.
struct BusyGuard<'a> {
    session: &'a mut Session,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        if self.session.is_busy() {
            self.session.abandon();
        }
    }
}
