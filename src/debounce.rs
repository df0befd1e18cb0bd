//! Debounced Callbacks
//!
//! Scheduling again before the delay elapses cancels the pending call.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Holds at most one pending call handle
#[derive(Debug)]
struct Pending<T> {
    slot: Option<T>,
}

impl<T> Default for Pending<T> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<T> Pending<T> {
    /// Store `next`, handing back the call it supersedes
    fn replace(&mut self, next: T) -> Option<T> {
        self.slot.replace(next)
    }

    fn cancel(&mut self) -> Option<T> {
        self.slot.take()
    }

    fn is_pending(&self) -> bool {
        self.slot.is_some()
    }
}

#[derive(Clone, Copy)]
pub struct Debouncer {
    delay_ms: u32,
    pending: StoredValue<Pending<Timeout>, LocalStorage>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: StoredValue::new_local(Pending::default()),
        }
    }

    /// Run `f` once input has been quiet for the delay
    pub fn schedule(&self, f: impl FnOnce() + 'static) {
        let timeout = Timeout::new(self.delay_ms, f);
        // Dropping the superseded Timeout clears it
        self.pending.update_value(|p| drop(p.replace(timeout)));
    }

    /// Drop the pending call, if any; used when input is applied at once
    pub fn cancel(&self) {
        self.pending.update_value(|p| drop(p.cancel()));
    }

    pub fn is_pending(&self) -> bool {
        self.pending.with_value(Pending::is_pending)
    }
}
