//! Scheduled Tasks
//!
//! Cancellable delayed execution on the tokio runtime, and a debouncer that
//! keeps at most one pending task alive.

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

// == Scheduled Task ==
/// Handle to a job that runs once `delay` has elapsed.
///
/// Cancelling only stops a job that has not fired yet. Once the delay
/// elapses the job is detached onto its own task, so cancelling afterwards
/// leaves the running job alone.
#[derive(Debug)]
pub struct ScheduledTask {
    timer: JoinHandle<()>,
    fired: Arc<AtomicBool>,
}

/// Schedules `job` to start after `delay`.
///
/// Must be called from within a tokio runtime.
pub fn schedule<F>(delay: Duration, job: F) -> ScheduledTask
where
    F: Future<Output = ()> + Send + 'static,
{
    let fired = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&fired);

    let timer = tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        // No await between here and the spawn, so an abort either lands
        // during the sleep or is a no-op.
        flag.store(true, Ordering::SeqCst);
        tokio::spawn(job);
    });

    ScheduledTask { timer, fired }
}

impl ScheduledTask {
    /// Cancels the job if it has not fired. Returns true if it was stopped.
    pub fn cancel(self) -> bool {
        let pending = self.is_pending();
        self.timer.abort();
        pending
    }

    /// True while the delay is still running.
    pub fn is_pending(&self) -> bool {
        !self.fired.load(Ordering::SeqCst) && !self.timer.is_finished()
    }
}

// == Debouncer ==
/// Collapses bursts of calls into one job fired after a quiet period.
///
/// Each `call` cancels the previously scheduled job if it has not fired yet
/// and starts the window again.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<ScheduledTask>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replaces any pending job with `job`, to run after the full window.
    pub fn call<F>(&mut self, job: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if self.cancel() {
            debug!("Debounced job superseded before firing");
        }
        self.pending = Some(schedule(self.delay, job));
    }

    /// Cancels the pending job, if any. Returns true if one was stopped.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().map_or(false, ScheduledTask::cancel)
    }

    /// True while a job is waiting for its window to elapse.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().map_or(false, ScheduledTask::is_pending)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
