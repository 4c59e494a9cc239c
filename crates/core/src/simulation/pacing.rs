//! Driver-side step pacing.
//!
//! The engine advances one generation per `step()` and never reads a clock.
//! Drivers that run in real time use a `TickPacer` to decide when the next
//! step is due.

use std::time::{Duration, Instant};

/// Tracks when the last step was taken.
#[derive(Debug, Clone, Copy)]
pub struct TickPacer {
    last_step: Instant,
}

impl TickPacer {
    /// Start pacing with `now` as the last step time
    pub fn new(now: Instant) -> Self {
        Self { last_step: now }
    }

    /// Returns true when at least `interval` has elapsed since the last
    /// step, and records `now` as the new last step time.
    ///
    /// The last step time only moves when a step is due, so a slow caller
    /// never accumulates a backlog of steps.
    pub fn poll(&mut self, now: Instant, interval: Duration) -> bool {
        if now.saturating_duration_since(self.last_step) >= interval {
            self.last_step = now;
            true
        } else {
            false
        }
    }

    /// Time left until the next step is due at `now`
    pub fn remaining(&self, now: Instant, interval: Duration) -> Duration {
        interval.saturating_sub(now.saturating_duration_since(self.last_step))
    }
}
