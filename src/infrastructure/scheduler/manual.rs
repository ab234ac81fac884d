//! Virtual-clock scheduler
//!
//! Time only moves when `advance` is called, which makes escalation
//! timelines reproducible and instant to compute.

use std::cell::RefCell;
use std::time::Duration;

use crate::application::ports::{CancelHandle, OnceTask, RepeatingTask, Scheduler, MIN_INTERVAL};

enum Task {
    Once(OnceTask),
    Repeating { interval: Duration, task: RepeatingTask },
}

struct Timer {
    seq: u64,
    due: Duration,
    handle: CancelHandle,
    task: Task,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_seq: u64,
    timers: Vec<Timer>,
}

impl Clock {
    fn push(&mut self, due: Duration, handle: CancelHandle, task: Task) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.push(Timer {
            seq,
            due,
            handle,
            task,
        });
    }

    /// Remove and return the earliest live timer due at or before `limit`
    fn pop_due(&mut self, limit: Duration) -> Option<Timer> {
        self.timers.retain(|t| !t.handle.is_cancelled());

        let index = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= limit)
            .min_by_key(|(_, t)| (t.due, t.seq))
            .map(|(i, _)| i)?;

        Some(self.timers.swap_remove(index))
    }
}

/// Scheduler driven by an explicit virtual clock.
///
/// Timers due at the same instant fire in the order they were armed.
/// Tasks may arm or cancel timers while running.
#[derive(Default)]
pub struct ManualScheduler {
    clock: RefCell<Clock>,
}

impl ManualScheduler {
    /// Create a scheduler with the clock at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Virtual time elapsed since creation
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of armed, uncancelled timers
    pub fn pending(&self) -> usize {
        self.clock
            .borrow()
            .timers
            .iter()
            .filter(|t| !t.handle.is_cancelled())
            .count()
    }

    /// Due time of the earliest armed, uncancelled timer
    pub fn next_due(&self) -> Option<Duration> {
        self.clock
            .borrow()
            .timers
            .iter()
            .filter(|t| !t.handle.is_cancelled())
            .map(|t| t.due)
            .min()
    }

    /// Move the clock forward by `by`, firing every timer that comes due
    pub fn advance(&self, by: Duration) {
        let target = self.now() + by;
        self.advance_to(target);
    }

    /// Move the clock to `target`, firing every timer that comes due.
    /// Does nothing if `target` is in the past.
    pub fn advance_to(&self, target: Duration) {
        if target < self.now() {
            return;
        }

        while self.fire_next(target) {}
        self.clock.borrow_mut().now = target;
    }

    /// Fire the next due timer. The clock borrow is released before the
    /// task runs so it can arm further timers.
    fn fire_next(&self, limit: Duration) -> bool {
        let timer = {
            let mut clock = self.clock.borrow_mut();
            let Some(timer) = clock.pop_due(limit) else {
                return false;
            };
            clock.now = timer.due;
            timer
        };

        match timer.task {
            Task::Once(task) => task(),
            Task::Repeating { interval, mut task } => {
                task();
                if !timer.handle.is_cancelled() {
                    self.clock.borrow_mut().push(
                        timer.due + interval,
                        timer.handle,
                        Task::Repeating { interval, task },
                    );
                }
            }
        }
        true
    }
}

impl Scheduler for ManualScheduler {
    fn schedule_repeating(&self, interval: Duration, task: RepeatingTask) -> CancelHandle {
        let interval = interval.max(MIN_INTERVAL);
        let handle = CancelHandle::new();
        let mut clock = self.clock.borrow_mut();
        let due = clock.now + interval;
        clock.push(due, handle.clone(), Task::Repeating { interval, task });
        handle
    }

    fn schedule_once(&self, delay: Duration, task: OnceTask) -> CancelHandle {
        let handle = CancelHandle::new();
        let mut clock = self.clock.borrow_mut();
        let due = clock.now + delay;
        clock.push(due, handle.clone(), Task::Once(task));
        handle
    }
}
