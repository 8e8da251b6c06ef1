//! Step navigation for a playback session.

use log::debug;

use super::{build_steps, parse_duration, Timer, TimerState};
use crate::models::{Activity, Plan, Step};

/// User-level commands accepted by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Back,
    /// Jump to a step by index (step-dot navigation)
    JumpTo(usize),
    Close,
    /// Start the countdown when stopped, pause it when running
    ToggleTimer,
    ResetTimer,
    ToggleMinimized,
}

/// What a command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing changed (boundary, out of range, or timer transition refused)
    Unchanged,
    /// The active step changed and the timer was reloaded
    Moved,
    /// Only timer state changed
    TimerChanged,
    /// The session was closed; the host should dismiss the view
    Closed,
}

/// A playback session over one plan.
///
/// The plan is immutable for the session's lifetime. Steps are derived when
/// the session opens, and the timer always reflects the active step.
#[derive(Debug, Clone)]
pub struct Session {
    plan: Plan,
    steps: Vec<Step>,
    index: usize,
    timer: Timer,
}

impl Session {
    /// Opens a session at the first (overview) step.
    pub fn open(plan: Plan) -> Self {
        let steps = build_steps(&plan);
        let mut session = Self {
            plan,
            steps,
            index: 0,
            timer: Timer::default(),
        };
        session.reload_timer();
        session
    }

    pub fn plan(&self) -> &Plan {
        &self.plan
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    pub fn current_step(&self) -> &Step {
        &self.steps[self.index]
    }

    /// Activity presented by the current step, if any.
    pub fn current_activity(&self) -> Option<&Activity> {
        self.current_step().activity(&self.plan)
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.steps.len()
    }

    /// Advances one step; a no-op on the last step.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.move_to(self.index + 1)
    }

    /// Goes back one step; a no-op on the first step.
    pub fn back(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.move_to(self.index - 1)
    }

    /// Jumps to any in-range step. Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.steps.len() {
            debug!("Ignoring jump to step {index} of {}", self.steps.len());
            return false;
        }
        self.move_to(index)
    }

    /// Returns to the first step with the timer stopped.
    pub fn close(&mut self) {
        self.index = 0;
        self.reload_timer();
    }

    /// Delivers one elapsed second to the active step's timer.
    pub fn tick_timer(&mut self) -> TimerState {
        self.timer.tick()
    }

    /// Applies a command and reports what changed.
    pub fn apply(&mut self, command: Command) -> Outcome {
        let moved = |changed: bool| {
            if changed {
                Outcome::Moved
            } else {
                Outcome::Unchanged
            }
        };
        let timer_changed = |changed: bool| {
            if changed {
                Outcome::TimerChanged
            } else {
                Outcome::Unchanged
            }
        };

        match command {
            Command::Next => moved(self.next()),
            Command::Back => moved(self.back()),
            Command::JumpTo(index) => moved(self.jump_to(index)),
            Command::Close => {
                self.close();
                Outcome::Closed
            }
            Command::ToggleTimer => timer_changed(self.timer.toggle()),
            Command::ResetTimer => {
                let before = self.timer.clone();
                self.timer.reset();
                timer_changed(before != self.timer)
            }
            Command::ToggleMinimized => {
                self.timer.toggle_minimized();
                Outcome::TimerChanged
            }
        }
    }

    /// Moving onto the step already shown (e.g. clicking its own dot) keeps
    /// the countdown.
    fn move_to(&mut self, index: usize) -> bool {
        if index == self.index {
            return false;
        }
        debug!("Step {} -> {index}", self.index);
        self.index = index;
        self.reload_timer();
        true
    }

    fn reload_timer(&mut self) {
        let total = self
            .current_activity()
            .and_then(Activity::duration_label)
            .map_or(0, parse_duration);
        self.timer.load(total);
    }
}
