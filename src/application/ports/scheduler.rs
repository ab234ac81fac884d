//! Scheduler port for single-threaded timers
//!
//! Timer callbacks run one at a time on the thread that owns the scheduler,
//! so tasks may capture `Rc` state without locking.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use tokio::sync::Notify;

/// Shortest period a repeating timer may have
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Task run on every tick of a repeating timer
pub type RepeatingTask = Box<dyn FnMut()>;

/// Task run once when a one-shot timer fires
pub type OnceTask = Box<dyn FnOnce()>;

#[derive(Debug, Default)]
struct CancelState {
    cancelled: Cell<bool>,
    notify: Notify,
}

/// Handle to an armed timer.
///
/// Cancelling is idempotent. Once cancelled, the timer's task never runs
/// again, even if it was already due. Dropping the handle does not cancel.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle {
    state: Rc<CancelState>,
}

impl CancelHandle {
    /// Create a handle for a newly armed timer
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel the timer and wake whoever awaits [`cancelled`](Self::cancelled)
    pub fn cancel(&self) {
        if !self.state.cancelled.replace(true) {
            self.state.notify.notify_waiters();
        }
    }

    /// Check if the timer was cancelled
    pub fn is_cancelled(&self) -> bool {
        self.state.cancelled.get()
    }

    /// Resolve once the timer is cancelled
    pub async fn cancelled(&self) {
        let notified = self.state.notify.notified();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}

/// Port for arming timers
pub trait Scheduler {
    /// Run `task` every `interval` until cancelled. The first run happens
    /// one interval from now.
    fn schedule_repeating(&self, interval: Duration, task: RepeatingTask) -> CancelHandle;

    /// Run `task` once after `delay` unless cancelled first.
    fn schedule_once(&self, delay: Duration, task: OnceTask) -> CancelHandle;
}
