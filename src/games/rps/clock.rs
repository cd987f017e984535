//! Per-round countdown.
//!
//! The clock does not own a timer. The caller ticks it, and every tick names
//! the round it was scheduled for; a tick for any other round, or for a clock
//! that already expired or was cancelled, is ignored. A timer left over from a
//! finished round or a torn-down session therefore cannot fire into the
//! current one.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockState {
    Running,
    Expired,
    Cancelled,
}

/// What a tick did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockTick {
    /// Counted down; `remaining` ticks are left.
    Running { remaining: u32 },
    /// This tick reached zero.
    Expired,
    /// Stale round, or the clock is no longer running.
    Ignored,
}

/// Countdown bound to one round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundClock {
    round: u32,
    total: u32,
    remaining: u32,
    state: ClockState,
}

impl RoundClock {
    /// Start a clock of `ticks` ticks for `round`.
    #[must_use]
    pub fn start(round: u32, ticks: u32) -> Self {
        Self {
            round,
            total: ticks,
            remaining: ticks,
            state: ClockState::Running,
        }
    }

    #[must_use]
    pub fn round(&self) -> u32 {
        self.round
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn state(&self) -> ClockState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == ClockState::Running
    }

    /// Share of the round left, for a progress bar.
    #[must_use]
    pub fn fraction_remaining(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.remaining as f32 / self.total as f32
        }
    }

    /// Count down one tick scheduled for `round`.
    pub fn tick(&mut self, round: u32) -> ClockTick {
        if round != self.round || !self.is_running() {
            return ClockTick::Ignored;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.state = ClockState::Expired;
            ClockTick::Expired
        } else {
            ClockTick::Running {
                remaining: self.remaining,
            }
        }
    }

    /// Stop the clock. Later ticks are ignored.
    pub fn cancel(&mut self) {
        if self.is_running() {
            self.state = ClockState::Cancelled;
        }
    }
}
