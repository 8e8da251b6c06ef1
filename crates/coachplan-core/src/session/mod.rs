//! Session playback engine.
//!
//! A plan is linearized into steps by [`build_steps`], each activity step gets
//! a countdown from [`parse_duration`], and a [`Session`] moves through the
//! steps while keeping its [`Timer`] aligned with the active step.
//! [`Playback`] adds real time: it owns the single [`Ticker`] that feeds the
//! timer and cancels it whenever the countdown stops.
//!
//! ```text
//! Plan ──build_steps──▶ [overview, warm-up*, main*, cool-down*, summary]
//!                                  │
//!                           Session (index, Timer)
//!                                  │
//!                     Playback (Session + Option<Ticker>)
//! ```
//!
//! Nothing here renders: the display layer turns `(plan, step, timer)` into
//! output.

pub mod duration;
pub mod navigator;
pub mod playback;
pub mod sequence;
pub mod ticker;
pub mod timer;

pub use duration::parse_duration;
pub use navigator::{Command, Outcome, Session};
pub use playback::Playback;
pub use sequence::build_steps;
pub use ticker::{Ticker, TICK_PERIOD};
pub use timer::{Timer, TimerState};
