// timer.rs - Cancellable repeating step timer
//
// The timer task never touches the simulation. It only pushes ticks into a
// one-slot channel and asks the UI to repaint; the UI thread drains the ticks
// and dispatches the advances itself.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};
use tracing::debug;

pub struct StepTimer {
    interval: Duration,
    run: Option<Run>,
}

/// One started task and the receiving end of its private tick channel.
/// Each start gets a fresh channel, so a tick sent by a task that is still
/// winding down after `abort` can never reach a later run.
struct Run {
    task: JoinHandle<()>,
    ticks: mpsc::Receiver<()>,
}

impl StepTimer {
    pub fn new(interval: Duration) -> Self {
        Self { interval, run: None }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.run.is_some()
    }

    /// Starts ticking if not already started. `wake` runs after each tick.
    pub fn start(&mut self, runtime: &Handle, wake: impl Fn() + Send + 'static) {
        if self.run.is_some() {
            return;
        }

        // One slot: a slow frame drops surplus ticks instead of queueing a burst.
        let (tx, ticks) = mpsc::channel(1);
        let period = self.interval;
        let task = runtime.spawn(async move {
            let mut ticker = time::interval_at(time::Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                if tx.try_send(()).is_err() && tx.is_closed() {
                    break;
                }
                wake();
            }
        });
        self.run = Some(Run { task, ticks });
        debug!(interval_ms = period.as_millis() as u64, "step timer started");
    }

    /// Cancels the task and drops its channel along with any unconsumed tick.
    pub fn stop(&mut self) {
        if let Some(run) = self.run.take() {
            run.task.abort();
            debug!("step timer stopped");
        }
    }

    /// Takes one pending tick, if any.
    pub fn poll_tick(&mut self) -> bool {
        self.run
            .as_mut()
            .is_some_and(|run| run.ticks.try_recv().is_ok())
    }

    /// Changes the cadence, restarting the task if it was running.
    pub fn set_interval(&mut self, runtime: &Handle, interval: Duration, wake: impl Fn() + Send + 'static) {
        if interval == self.interval {
            return;
        }
        self.interval = interval;
        if self.is_running() {
            self.stop();
            self.start(runtime, wake);
        }
    }
}

impl Drop for StepTimer {
    fn drop(&mut self) {
        if let Some(run) = self.run.take() {
            run.task.abort();
        }
    }
}
