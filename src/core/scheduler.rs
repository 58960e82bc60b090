//! Explicit timed subscriptions driven by the game loop.
//!
//! Each subscription has a task value, a next-fire time and an optional
//! repeat interval. [`Scheduler::advance`] moves the clock and returns every
//! task that came due, ordered by fire time and then by registration order,
//! so callers process them deterministically.

/// Handle to a scheduled task. Cancelling through it is the only way to stop
/// a one-shot timer before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

#[derive(Debug, Clone)]
struct Subscription<T> {
    id: u64,
    task: T,
    next_fire: f64,
    interval: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now: f64,
    next_id: u64,
    subscriptions: Vec<Subscription<T>>,
}

impl<T: Copy + PartialEq> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + PartialEq> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now: 0.0,
            next_id: 0,
            subscriptions: Vec::new(),
        }
    }

    /// Seconds elapsed since the scheduler was created.
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Fire `task` after `first_delay` seconds, then every `interval` seconds.
    pub fn every(&mut self, first_delay: f64, interval: f64, task: T) -> TimerHandle {
        debug_assert!(interval > 0.0, "repeat interval must be positive");
        self.push(task, first_delay, Some(interval))
    }

    /// Fire `task` once after `delay` seconds.
    pub fn after(&mut self, delay: f64, task: T) -> TimerHandle {
        self.push(task, delay, None)
    }

    fn push(&mut self, task: T, delay: f64, interval: Option<f64>) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.subscriptions.push(Subscription {
            id,
            task,
            next_fire: self.now + delay.max(0.0),
            interval,
        });
        TimerHandle(id)
    }

    /// Cancel one subscription. Returns false if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != handle.0);
        self.subscriptions.len() != before
    }

    /// Cancel every subscription carrying `task`. Returns how many were removed.
    pub fn cancel_task(&mut self, task: T) -> usize {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.task != task);
        before - self.subscriptions.len()
    }

    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.subscriptions.iter().any(|s| s.id == handle.0)
    }

    pub fn is_task_scheduled(&self, task: T) -> bool {
        self.subscriptions.iter().any(|s| s.task == task)
    }

    pub fn clear(&mut self) {
        self.subscriptions.clear();
    }

    /// Advance the clock by `dt` seconds and collect every task that came due.
    pub fn advance(&mut self, dt: f64) -> Vec<T> {
        self.now += dt.max(0.0);
        let mut fired = Vec::new();

        loop {
            let due = self
                .subscriptions
                .iter()
                .enumerate()
                .filter(|(_, s)| s.next_fire <= self.now)
                .min_by(|(_, a), (_, b)| {
                    a.next_fire
                        .total_cmp(&b.next_fire)
                        .then(a.id.cmp(&b.id))
                })
                .map(|(i, _)| i);

            let Some(index) = due else { break };

            let sub = &mut self.subscriptions[index];
            fired.push(sub.task);
            match sub.interval {
                Some(interval) => sub.next_fire += interval,
                None => {
                    self.subscriptions.remove(index);
                }
            }
        }

        fired
    }
}
