//! Async playback driver: a session plus its single tick source.

use std::{future, time::Duration};

use log::debug;

use super::{Command, Outcome, Session, Ticker, TimerState, TICK_PERIOD};
use crate::models::Plan;

/// Drives a [`Session`] in real time.
///
/// The driver owns at most one [`Ticker`], armed only while the timer is
/// running. Any command that stops the countdown (pause, reset, step change,
/// close) drops the ticker before anything else can arm a new one, so no tick
/// ever reaches a step that is no longer shown.
///
/// # Examples
///
/// ```rust
/// use coachplan_core::{models::Plan, session::{Command, Playback}};
///
/// # async fn example() {
/// let mut playback = Playback::open(Plan::default());
/// playback.dispatch(Command::Next);
/// assert!(!playback.is_ticking());
/// playback.close();
/// # }
/// ```
#[derive(Debug)]
pub struct Playback {
    session: Session,
    ticker: Option<Ticker>,
    period: Duration,
    closed: bool,
}

impl Playback {
    /// Opens playback for a plan at the overview step.
    pub fn open(plan: Plan) -> Self {
        Self::with_period(plan, TICK_PERIOD)
    }

    /// Opens playback with a custom tick period.
    pub fn with_period(plan: Plan, period: Duration) -> Self {
        Self {
            session: Session::open(plan),
            ticker: None,
            period,
            closed: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// True while a tick source is armed.
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Applies a command, then brings the tick source in line with the timer.
    ///
    /// Commands after close are ignored.
    pub fn dispatch(&mut self, command: Command) -> Outcome {
        if self.closed {
            return Outcome::Unchanged;
        }

        let outcome = self.session.apply(command);
        match outcome {
            Outcome::Unchanged => {}
            Outcome::Moved => self.cancel_ticker(),
            Outcome::Closed => {
                self.cancel_ticker();
                self.closed = true;
            }
            Outcome::TimerChanged => {
                if !self.session.timer().is_running() {
                    self.cancel_ticker();
                } else if self.ticker.is_none() {
                    debug!("Arming ticker for step {}", self.session.current_step().id);
                    self.ticker = Some(Ticker::start(self.period));
                }
            }
        }
        outcome
    }

    /// Waits for the next tick and applies it to the timer.
    ///
    /// Pends forever while no ticker is armed, which makes it safe to use as
    /// a branch in `tokio::select!`. Cancel-safe: a tick is only applied after
    /// it has been received.
    pub async fn next_tick(&mut self) -> TimerState {
        let received = match self.ticker.as_mut() {
            Some(ticker) => ticker.tick().await,
            None => None,
        };
        if received.is_none() {
            self.cancel_ticker();
            return future::pending().await;
        }

        let state = self.session.tick_timer();
        if state != TimerState::Running {
            self.cancel_ticker();
        }
        state
    }

    /// Closes the session and cancels any pending tick.
    pub fn close(&mut self) {
        self.dispatch(Command::Close);
    }

    fn cancel_ticker(&mut self) {
        if self.ticker.take().is_some() {
            debug!("Ticker cancelled");
        }
    }
}
