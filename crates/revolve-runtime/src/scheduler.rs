#![forbid(unsafe_code)]

//! Deterministic task scheduler.
//!
//! Deferred work (autoplay ticks, post-animation corrections, pulse clears) is
//! recorded here as plain task values with a due time. Nothing runs on its
//! own: the owner reads the clock and drains due tasks with
//! [`Scheduler::pop_due`], routing each one back into its own `update`-style
//! handler. Tests drive this with a manual clock and never sleep.
//!
//! # Ordering
//!
//! Tasks fire in ascending due time; ties fire in scheduling order. A
//! repeating task fires at most once per `pop_due` sweep: after a long gap
//! between pumps the missed ticks are skipped and the task is re-armed at the
//! first multiple of its interval past `now`, keeping its phase.

use std::fmt;
use std::time::Duration;

/// Handle to a scheduled task, used for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(u64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "task#{}", self.0)
    }
}

/// A task that has come due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<T> {
    /// Handle the task was scheduled under.
    pub id: TaskId,
    /// The time it was due (not the time it was popped).
    pub due: Duration,
    /// Task payload.
    pub task: T,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    id: TaskId,
    due: Duration,
    seq: u64,
    every: Option<Duration>,
    task: T,
}

/// Queue of delayed and repeating tasks on a virtual timeline.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    entries: Vec<Entry<T>>,
    next_id: u64,
    next_seq: u64,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
            next_seq: 0,
        }
    }
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `task` once, `delay` after `now`.
    pub fn schedule_after(&mut self, now: Duration, delay: Duration, task: T) -> TaskId {
        self.push(now.saturating_add(delay), None, task)
    }

    /// Run `task` every `interval`, first firing one interval after `now`.
    ///
    /// A zero interval is bumped to one nanosecond so the task cannot starve
    /// the queue.
    pub fn schedule_every(&mut self, now: Duration, interval: Duration, task: T) -> TaskId {
        let interval = interval.max(Duration::from_nanos(1));
        self.push(now.saturating_add(interval), Some(interval), task)
    }

    /// Cancel a pending task. Returns whether it was still pending.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        before != self.entries.len()
    }

    /// Whether `id` is still scheduled.
    #[must_use]
    pub fn is_pending(&self, id: TaskId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// Earliest due time, if anything is scheduled.
    #[must_use]
    pub fn next_due(&self) -> Option<Duration> {
        self.entries.iter().map(|e| e.due).min()
    }

    /// Number of scheduled tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is scheduled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every scheduled task.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn push(&mut self, due: Duration, every: Option<Duration>, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        let seq = self.bump_seq();
        self.entries.push(Entry {
            id,
            due,
            seq,
            every,
            task,
        });
        id
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    fn earliest_due_index(&self, now: Duration) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= now)
            .min_by_key(|(_, e)| (e.due, e.seq))
            .map(|(idx, _)| idx)
    }
}

impl<T: Clone> Scheduler<T> {
    /// Remove and return the earliest task due at or before `now`.
    ///
    /// Repeating tasks stay scheduled, re-armed at their first tick after
    /// `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<Fired<T>> {
        let idx = self.earliest_due_index(now)?;
        match self.entries[idx].every {
            Some(interval) => {
                let seq = self.bump_seq();
                let entry = &mut self.entries[idx];
                let fired = Fired {
                    id: entry.id,
                    due: entry.due,
                    task: entry.task.clone(),
                };
                entry.due = next_tick_after(entry.due, interval, now);
                entry.seq = seq;
                Some(fired)
            }
            None => {
                let entry = self.entries.swap_remove(idx);
                Some(Fired {
                    id: entry.id,
                    due: entry.due,
                    task: entry.task,
                })
            }
        }
    }

    /// Drain every task due at or before `now`, in firing order.
    ///
    /// A repeating task appears at most once.
    pub fn drain_due(&mut self, now: Duration) -> Vec<Fired<T>> {
        let mut out = Vec::new();
        while let Some(fired) = self.pop_due(now) {
            out.push(fired);
        }
        out
    }
}

/// First `due + k·interval` (k ≥ 1) strictly after `now`.
fn next_tick_after(due: Duration, interval: Duration, now: Duration) -> Duration {
    let interval_ns = interval.as_nanos().max(1);
    let behind_ns = now.saturating_sub(due).as_nanos();
    let steps = behind_ns / interval_ns + 1;
    let advance_ns = interval_ns.saturating_mul(steps);
    due.saturating_add(Duration::from_nanos(
        u64::try_from(advance_ns).unwrap_or(u64::MAX),
    ))
}
