//! Cancellable timer scheduling for debounce and transient UI state.
//!
//! All work in deskpad runs as a reaction to an input event or a timer
//! expiry. Timers are held here as explicit deadlines and pumped by the
//! front-end (`App::tick`), so the core never reads the clock on its own
//! and tests can drive time with synthetic instants.

pub mod debounce;

pub use debounce::Debouncer;

use std::time::{Duration, Instant};

/// Opaque handle to a scheduled task, used to cancel it before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug)]
struct Entry<T> {
    handle: TimerHandle,
    due: Instant,
    task: T,
}

/// Pending timers, fired in schedule order once their deadline passes.
///
/// Cancellation is exact: a cancelled task is removed immediately and can
/// never be returned by [`Scheduler::fire_due`], even if its deadline has
/// already elapsed.
#[derive(Debug)]
pub struct Scheduler<T> {
    next_handle: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            next_handle: 0,
            entries: Vec::new(),
        }
    }

    pub fn schedule(&mut self, now: Instant, delay: Duration, task: T) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.entries.push(Entry {
            handle,
            due: now + delay,
            task,
        });
        handle
    }

    /// Remove a pending task. Returns false if it already fired or was
    /// cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.handle != handle);
        self.entries.len() != before
    }

    /// Remove and return every task whose deadline is at or before `now`,
    /// in the order they were scheduled.
    pub fn fire_due(&mut self, now: Instant) -> Vec<T> {
        let entries = std::mem::take(&mut self.entries);
        let (due, pending): (Vec<_>, Vec<_>) =
            entries.into_iter().partition(|entry| entry.due <= now);
        self.entries = pending;
        due.into_iter().map(|entry| entry.task).collect()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.entries.iter().map(|entry| entry.due).min()
    }

    pub fn is_idle(&self) -> bool {
        self.entries.is_empty()
    }
}
