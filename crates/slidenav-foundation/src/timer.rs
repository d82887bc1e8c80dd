//! Deadline-based timers.
//!
//! Nothing here sleeps or spawns. Each timer records the instant it becomes
//! due and the owner polls it with the current time; the platform uses
//! `deadline()` to schedule a single wakeup (`setTimeout` on the web, a
//! synthetic clock in tests).

use web_time::{Duration, Instant};

/// Trailing-edge debounce.
///
/// Every `call` made before the quiet period elapses replaces the pending
/// arguments and pushes the deadline back, so a burst collapses into one
/// `poll` result carrying the most recent arguments.
#[derive(Debug)]
pub struct Debounce<A> {
    wait: Duration,
    pending: Option<(Instant, A)>,
}

impl<A> Debounce<A> {
    pub fn new(wait: Duration) -> Self {
        Self {
            wait,
            pending: None,
        }
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }

    pub fn call(&mut self, now: Instant, args: A) {
        self.pending = Some((now + self.wait, args));
    }

    /// Takes the pending arguments once the quiet period has passed.
    pub fn poll(&mut self, now: Instant) -> Option<A> {
        let due = self
            .pending
            .as_ref()
            .map_or(false, |(deadline, _)| now >= *deadline);
        if due {
            log::trace!("debounce fired after {:?} quiet", self.wait);
            self.pending.take().map(|(_, args)| args)
        } else {
            None
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

/// Single pending deadline; scheduling again replaces it.
#[derive(Clone, Copy, Debug, Default)]
pub struct OneShot {
    due: Option<Instant>,
}

impl OneShot {
    pub const fn new() -> Self {
        Self { due: None }
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.due = Some(now + delay);
    }

    /// Returns `true` exactly once, on the first poll at or after the deadline.
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                log::trace!("one-shot fired {:?} late", now - due);
                self.due = None;
                true
            }
            _ => false,
        }
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.due
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }
}
