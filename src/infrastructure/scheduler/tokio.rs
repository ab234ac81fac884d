//! Real-time scheduler on a tokio `LocalSet`
//!
//! Each timer is a local task, so callbacks run on the runtime thread and
//! never concurrently with each other. Cancelling a timer ends its task
//! right away and drops the callback.

use std::time::Duration;

use tokio::time::{self, Instant, MissedTickBehavior};

use crate::application::ports::{CancelHandle, OnceTask, RepeatingTask, Scheduler, MIN_INTERVAL};

/// Scheduler backed by tokio timers.
///
/// Must be used from inside a `tokio::task::LocalSet`; arming a timer
/// anywhere else panics.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioScheduler;

impl TokioScheduler {
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for TokioScheduler {
    fn schedule_repeating(&self, interval: Duration, mut task: RepeatingTask) -> CancelHandle {
        let interval = interval.max(MIN_INTERVAL);
        let handle = CancelHandle::new();
        let token = handle.clone();

        tokio::task::spawn_local(async move {
            let mut ticker = time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    _ = token.cancelled() => break,
                }
                if token.is_cancelled() {
                    break;
                }
                task();
            }
        });

        handle
    }

    fn schedule_once(&self, delay: Duration, task: OnceTask) -> CancelHandle {
        let handle = CancelHandle::new();
        let token = handle.clone();

        tokio::task::spawn_local(async move {
            tokio::select! {
                _ = time::sleep(delay) => {
                    if !token.is_cancelled() {
                        task();
                    }
                }
                _ = token.cancelled() => {}
            }
        });

        handle
    }
}
