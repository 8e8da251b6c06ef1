//! Countdown formatting.

use std::fmt;

use crate::session::{Timer, TimerState};

/// Seconds shown as `MM:SS`; minutes grow past two digits when needed.
///
/// ```rust
/// use coachplan_core::display::Countdown;
///
/// assert_eq!(Countdown(300).to_string(), "05:00");
/// assert_eq!(Countdown(59).to_string(), "00:59");
/// assert_eq!(Countdown(6000).to_string(), "100:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown(pub u32);

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// One-line timer status for the playback screen.
///
/// Minimized timers show only the remaining time.
pub struct TimerLine<'a>(pub &'a Timer);

impl fmt::Display for TimerLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let timer = self.0;
        if !timer.has_duration() {
            return write!(f, "No timer for this step");
        }

        let remaining = Countdown(timer.remaining_seconds());
        if timer.is_minimized() {
            return write!(f, "⏱ {remaining}");
        }

        write!(
            f,
            "⏱ {remaining} / {} ({})",
            Countdown(timer.total_seconds()),
            timer.state()
        )?;
        if timer.state() == TimerState::Expired {
            write!(f, " - move on when ready")?;
        }
        Ok(())
    }
}
