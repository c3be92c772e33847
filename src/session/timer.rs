//! Fixed-interval tick scheduling for the event loop.

use std::time::{Duration, Instant};

/// A cancellable repeating timer polled by the event loop.
///
/// `poll` fires at most once per call and re-arms one interval after the
/// moment it was polled, so a stalled loop never triggers a burst of
/// catch-up ticks.
#[derive(Debug, Clone, Default)]
pub struct TickTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl TickTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer; the first tick is due one `interval` after `now`.
    /// Replaces any schedule already running.
    pub fn start(&mut self, interval: Duration, now: Instant) {
        self.interval = interval;
        self.next_due = Some(now + interval);
    }

    pub fn cancel(&mut self) {
        self.next_due = None;
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// True if a tick is due at `now`.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, `None` when cancelled.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
