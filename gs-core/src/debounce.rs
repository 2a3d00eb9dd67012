//! Ticket-based debounce gate.
//!
//! The gate does not own a timer. The caller pushes every new value, starts
//! a timer for the returned [`Ticket`], and hands the ticket back when the
//! timer fires. Only the ticket of the most recent push yields a value, so
//! a burst of pushes emits exactly once, with the last value. Dropping the
//! owner or calling [`Debouncer::cancel`] voids any outstanding ticket.

/// Handle for one pending emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    generation: u64,
    pending: Option<T>,
}

impl<T> Default for Debouncer<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: None,
        }
    }
}

impl<T> Debouncer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pending value and restart the wait.
    pub fn push(&mut self, value: T) -> Ticket {
        self.generation += 1;
        self.pending = Some(value);
        Ticket(self.generation)
    }

    /// Called when the quiet period for `ticket` has elapsed. Returns the
    /// value to emit, or `None` if a newer push or a cancel superseded it.
    pub fn fire(&mut self, ticket: Ticket) -> Option<T> {
        if ticket.0 != self.generation {
            return None;
        }
        self.pending.take()
    }

    /// Drop the pending value; outstanding tickets fire nothing.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
