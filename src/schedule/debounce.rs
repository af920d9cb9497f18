use super::{Scheduler, TimerHandle};
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Latest-wins timer replacement, one pending task per channel.
///
/// Each new event on a channel cancels that channel's pending task and
/// schedules a fresh one, so only the evaluation belonging to the last
/// event before the quiet period elapses ever runs. Channels debounce
/// independently of each other.
#[derive(Debug, Default)]
pub struct Debouncer<C> {
    pending: HashMap<C, TimerHandle>,
}

impl<C: Eq + Hash + Clone> Debouncer<C> {
    pub fn new() -> Self {
        Self {
            pending: HashMap::new(),
        }
    }

    pub fn debounce<T>(
        &mut self,
        scheduler: &mut Scheduler<T>,
        channel: C,
        now: Instant,
        delay: Duration,
        task: T,
    ) -> TimerHandle {
        if let Some(stale) = self.pending.remove(&channel) {
            scheduler.cancel(stale);
        }
        let handle = scheduler.schedule(now, delay, task);
        self.pending.insert(channel, handle);
        handle
    }
}
