//! Module: sequence
//! Responsibility: discard responses to requests that a newer request has
//! superseded.
//!
//! Handlers call `begin()` before issuing a read, and pass the response
//! through `accept()` before applying it. Only the newest ticket is ever
//! accepted, so out-of-order completions cannot overwrite newer state.

use crate::obs::{self, MetricsEvent};
use std::cell::Cell;
use tracing::debug;

///
/// Ticket
///

#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub const fn generation(self) -> u64 {
        self.0
    }
}

///
/// RequestSequencer
///
/// Monotonic generation counter owned by one screen session.
///

#[derive(Debug, Default)]
pub struct RequestSequencer {
    current: Cell<u64>,
}

impl RequestSequencer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            current: Cell::new(0),
        }
    }

    /// Start a request; every older ticket becomes stale.
    pub fn begin(&self) -> Ticket {
        let next = self.current.get().wrapping_add(1);
        self.current.set(next);

        Ticket(next)
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.current.get()
    }

    /// Hand `value` back only if `ticket` is still the newest request.
    pub fn accept<T>(&self, ticket: Ticket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            return Some(value);
        }

        debug!(
            ticket = ticket.0,
            current = self.current.get(),
            "stale response discarded"
        );
        obs::record(MetricsEvent::StaleResponseDiscarded);

        None
    }
}

///
/// TESTS
///
