//! Ticketed delayed transition.
//!
//! The picker closes immediately but resets its sub-view only after the
//! host's close animation has had time to finish. Rather than letting the
//! host run an untracked timer against live state, the pending transition is
//! held here: [`Deferred::schedule`] hands out a [`Ticket`], the host's timer
//! calls [`Deferred::fire`] with it, and only the most recent ticket can fire.
//! Rescheduling or cancelling makes every older ticket stale.

#[cfg(test)]
#[path = "deferred_test.rs"]
mod deferred_test;

/// Identifies one scheduled transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub fn id(self) -> u64 {
        self.0
    }
}

/// A single pending value that can be fired once by its latest ticket.
#[derive(Clone, Debug)]
pub struct Deferred<T> {
    pending: Option<(Ticket, T)>,
    next_id: u64,
}

impl<T> Default for Deferred<T> {
    fn default() -> Self {
        Self { pending: None, next_id: 0 }
    }
}

impl<T> Deferred<T> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any pending value and return the ticket that can fire it.
    pub fn schedule(&mut self, value: T) -> Ticket {
        self.next_id += 1;
        let ticket = Ticket(self.next_id);
        self.pending = Some((ticket, value));
        ticket
    }

    /// Drop the pending value. Returns `true` if something was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Take the pending value if `ticket` is the latest one issued.
    /// Stale or already-fired tickets return `None`.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        match &self.pending {
            Some((current, _)) if *current == ticket => self.pending.take().map(|(_, value)| value),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Ticket of the pending value, if any.
    #[must_use]
    pub fn pending_ticket(&self) -> Option<Ticket> {
        self.pending.as_ref().map(|(ticket, _)| *ticket)
    }
}
