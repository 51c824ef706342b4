// SPDX-License-Identifier: MPL-2.0
//! Monotonic tickets used to discard stale asynchronous completions.
//!
//! Every asynchronous operation started by the workflow (reading a candidate,
//! rendering a preview, sending a request) is tagged with the ticket that was
//! current when it was issued. When its result comes back, it is applied only
//! if that ticket is still the latest one.

/// Opaque sequence number handed out by a [`Sequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Counter that issues increasing tickets and remembers the latest one.
#[derive(Debug, Default)]
pub struct Sequence {
    latest: u64,
}

impl Sequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a new ticket, superseding every ticket issued before.
    pub fn advance(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    /// Invalidates outstanding tickets without issuing a usable one.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}
