//! Cancellable one-second tick source.

use std::time::Duration;

use tokio::{
    sync::mpsc,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};

/// Period between countdown ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// A periodic tick source backed by a tokio task.
///
/// Each ticker owns its channel, so dropping it both aborts the task and
/// discards any tick already queued: a cancelled ticker can never be observed
/// again.
#[derive(Debug)]
pub struct Ticker {
    handle: JoinHandle<()>,
    ticks: mpsc::Receiver<()>,
}

impl Ticker {
    /// Starts ticking every `period`, first tick one period from now.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(period: Duration) -> Self {
        let (tx, ticks) = mpsc::channel(1);
        let handle = tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(()).await.is_err() {
                    break;
                }
            }
        });
        Self { handle, ticks }
    }

    /// Waits for the next tick. Returns `None` if the task has stopped.
    pub async fn tick(&mut self) -> Option<()> {
        self.ticks.recv().await
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
