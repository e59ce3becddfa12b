//! Task Store
//!
//! Add, toggle, remove and filter operations over a persisted task list.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::persistent::PersistentList;
use crate::storage::KeyValueStore;
use crate::task::{Task, TaskCounts, TaskFilter, TaskId};

/// Default storage slot for the task list
pub const TASKS_KEY: &str = "tasks";

/// Source of creation timestamps
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Task collection with write-through persistence.
///
/// Every mutation saves the full list; a missing id is a no-op, not an error.
#[derive(Debug, Clone)]
pub struct TaskStore<S, C = SystemClock> {
    list: PersistentList<Task, S>,
    clock: C,
}

impl<S: KeyValueStore> TaskStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self::with_clock(store, key, SystemClock)
    }
}

impl<S: KeyValueStore, C: Clock> TaskStore<S, C> {
    pub fn with_clock(store: S, key: impl Into<String>, clock: C) -> Self {
        let list = PersistentList::new(store, key);
        log::debug!("[TASKS] Loaded {} tasks", list.len());
        Self { list, clock }
    }

    pub fn tasks(&self) -> &[Task] {
        self.list.items()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks().iter().find(|t| t.id == id)
    }

    /// Append a task. Blank text is ignored.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let created_at = self.clock.now();
        let id = self.next_id(created_at);
        self.list.update(|tasks| tasks.push(Task::new(id, text, created_at)));
        log::debug!("[TASKS] Added #{}", id);
        Some(id)
    }

    /// Flip `completed`. Returns whether a task matched.
    pub fn toggle(&mut self, id: TaskId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.list.update(|tasks| {
            let task = &mut tasks[index];
            task.completed = !task.completed;
        });
        true
    }

    /// Delete a task. Returns whether a task matched.
    pub fn remove(&mut self, id: TaskId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.list.update(|tasks| {
            tasks.remove(index);
        });
        log::debug!("[TASKS] Removed #{}", id);
        true
    }

    /// Delete every completed task in one write. Returns how many went.
    pub fn clear_completed(&mut self) -> usize {
        let removed = self.counts().completed;
        if removed > 0 {
            self.list.update(|tasks| tasks.retain(|t| !t.completed));
        }
        removed
    }

    /// Tasks shown under `filter`, in insertion order
    pub fn filter(&self, filter: TaskFilter) -> Vec<Task> {
        self.tasks()
            .iter()
            .filter(|t| t.matches(filter))
            .cloned()
            .collect()
    }

    pub fn counts(&self) -> TaskCounts {
        TaskCounts::of(self.tasks())
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks().iter().position(|t| t.id == id)
    }

    // Millisecond timestamp, bumped past the largest existing id when two
    // tasks land in the same tick. If the largest id is already `u64::MAX`
    // the first unused id from `millis` upward (wrapping to 0) is taken.
    fn next_id(&self, now: DateTime<Utc>) -> TaskId {
        let millis = TaskId::try_from(now.timestamp_millis()).unwrap_or(0);
        match self.tasks().iter().map(|t| t.id).max() {
            Some(max) if max >= millis => max.checked_add(1).unwrap_or_else(|| {
                log::warn!("[TASKS] id space exhausted above #{}, reusing a free id", max);
                self.first_free_id(millis)
            }),
            _ => millis,
        }
    }

    fn first_free_id(&self, from: TaskId) -> TaskId {
        let used: HashSet<TaskId> = self.tasks().iter().map(|t| t.id).collect();
        (from..=TaskId::MAX)
            .chain(0..from)
            .find(|id| !used.contains(id))
            .unwrap_or(from)
    }
}
