//! Search input debouncing
//!
//! Each keystroke replaces the pending value and pushes the deadline back by
//! the quiet period. Nothing fires until `poll` sees the deadline pass, so a
//! burst of typing costs one recompute.

use std::time::{Duration, Instant};

/// Cancel-and-reschedule timer holding the latest pending value
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    quiet: Duration,
    /// Value and deadline; no deadline when `quiet` runs past what
    /// `Instant` can represent, so only `flush` releases it
    pending: Option<(T, Option<Instant>)>,
}

impl<T> Debouncer<T> {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            pending: None,
        }
    }

    /// Replace the pending value; it fires `quiet` after `now`
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now.checked_add(self.quiet)));
    }

    /// Take the pending value if its deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let ready = matches!(self.pending, Some((_, Some(deadline))) if now >= deadline);
        if ready {
            self.flush()
        } else {
            None
        }
    }

    /// Take the pending value regardless of its deadline
    pub fn flush(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    /// Drop the pending value
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending value fires, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().and_then(|(_, deadline)| *deadline)
    }

    pub fn quiet(&self) -> Duration {
        self.quiet
    }
}
