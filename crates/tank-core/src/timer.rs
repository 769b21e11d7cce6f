//! Elapsed-time gate shared by every timed action.
//!
//! A `Cooldown` accumulates elapsed time, becomes ready once the elapsed
//! time reaches its interval, and resets to zero when it fires. Shooting,
//! enemy attacks, bullet lifespans and the pre-level countdown all use it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cooldown {
    /// Seconds that must accumulate before the gate opens.
    pub interval_secs: f64,
    /// Seconds accumulated since the last fire (capped at the interval).
    pub elapsed_secs: f64,
}

impl Cooldown {
    /// A cooldown that starts closed and opens after `interval_secs`.
    pub fn new(interval_secs: f64) -> Self {
        Self {
            interval_secs,
            elapsed_secs: 0.0,
        }
    }

    /// A cooldown that is open immediately.
    pub fn ready(interval_secs: f64) -> Self {
        Self {
            interval_secs,
            elapsed_secs: interval_secs,
        }
    }

    /// Accumulate `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        self.elapsed_secs = (self.elapsed_secs + dt).min(self.interval_secs);
    }

    pub fn is_ready(&self) -> bool {
        self.elapsed_secs >= self.interval_secs
    }

    /// Fire if ready, resetting the accumulated time. Returns whether it fired.
    pub fn try_fire(&mut self) -> bool {
        if self.is_ready() {
            self.elapsed_secs = 0.0;
            true
        } else {
            false
        }
    }

    /// Seconds until the gate opens (0 when ready).
    pub fn remaining_secs(&self) -> f64 {
        (self.interval_secs - self.elapsed_secs).max(0.0)
    }
}
