//! Per-step countdown timer state machine.
//!
//! ```text
//!            start              tick (remaining > 1)
//!   ┌──────┐ ─────▶ ┌─────────┐ ◀───┐
//!   │ Idle │        │ Running │ ────┘
//!   └──────┘ ◀───── └─────────┘ ─────────────▶ ┌─────────┐
//!      ▲    reset     │    ▲    tick (→ 0)      │ Expired │
//!      │        pause │    │ start              └─────────┘
//!      │              ▼    │                        │
//!      │           ┌────────┐                       │
//!      └───────────│ Paused │      reset            │
//!         reset    └────────┘ ◀─────────────────────┘ (to Idle)
//! ```
//!
//! The timer holds no clock. Whoever owns it delivers one `tick` per elapsed
//! second while it is running; see [`crate::session::Playback`].

use serde::{Deserialize, Serialize};

/// Countdown state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    /// Stopped at the full duration
    Idle,
    Running,
    /// Stopped part-way through
    Paused,
    /// Counted down to zero
    Expired,
}

/// Countdown for the currently displayed step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timer {
    total_seconds: u32,
    remaining_seconds: u32,
    state: TimerState,
    /// View-state only; never affects counting
    minimized: bool,
}

impl Timer {
    /// Creates an idle timer for a step lasting `total_seconds`.
    pub fn new(total_seconds: u32) -> Self {
        Self {
            total_seconds,
            remaining_seconds: total_seconds,
            state: TimerState::Idle,
            minimized: false,
        }
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn is_minimized(&self) -> bool {
        self.minimized
    }

    /// True when the current step has a countdown at all.
    pub fn has_duration(&self) -> bool {
        self.total_seconds > 0
    }

    /// Starts counting down. Applies only from Idle or Paused with time left.
    pub fn start(&mut self) -> bool {
        let startable = matches!(self.state, TimerState::Idle | TimerState::Paused);
        if !startable || self.remaining_seconds == 0 {
            return false;
        }
        self.state = TimerState::Running;
        true
    }

    /// Freezes the countdown. Applies only while Running.
    pub fn pause(&mut self) -> bool {
        if self.state != TimerState::Running {
            return false;
        }
        self.state = TimerState::Paused;
        true
    }

    /// Starts when stopped, pauses when running.
    pub fn toggle(&mut self) -> bool {
        if self.is_running() {
            self.pause()
        } else {
            self.start()
        }
    }

    /// Returns to Idle at the full duration from any state.
    pub fn reset(&mut self) {
        self.remaining_seconds = self.total_seconds;
        self.state = TimerState::Idle;
    }

    /// Re-targets the timer at a newly active step, discarding any countdown
    /// in flight.
    pub fn load(&mut self, total_seconds: u32) {
        self.total_seconds = total_seconds;
        self.reset();
    }

    /// One elapsed second. Ignored unless Running.
    ///
    /// Returns the new state so the caller can stop its tick source on
    /// expiry.
    pub fn tick(&mut self) -> TimerState {
        if self.state == TimerState::Running {
            self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
            if self.remaining_seconds == 0 {
                self.state = TimerState::Expired;
            }
        }
        self.state
    }

    pub fn toggle_minimized(&mut self) {
        self.minimized = !self.minimized;
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new(0)
    }
}
