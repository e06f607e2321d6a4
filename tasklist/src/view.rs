//! Pure view derivations over the task list.
//!
//! Nothing here holds state: the visible subset, the summary counts, and
//! the full rendering snapshot are all recomputed from the current store
//! state on every read. Store sizes in this domain are small; caching
//! would only add invalidation complexity.

use crate::types::{Filter, Task, TaskListState};
use serde::{Deserialize, Serialize};

/// The tasks visible under a filter, preserving creation order
///
/// Pure: calling it twice with the same arguments yields equal results.
/// `Filter::All` returns the full sequence unchanged.
#[must_use]
pub fn visible_tasks(tasks: &[Task], filter: Filter) -> Vec<&Task> {
    tasks.iter().filter(|t| filter.matches(t)).collect()
}

/// Summary counts derived from the task collection
///
/// Always satisfies `remaining = total - completed` and
/// `0 <= completed <= total` for any reachable state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Number of tasks in the store
    pub total: usize,
    /// Number of completed tasks
    pub completed: usize,
    /// Number of tasks not yet completed
    pub remaining: usize,
}

impl Summary {
    /// Derives the summary from a task collection
    #[must_use]
    pub fn of(tasks: &[Task]) -> Self {
        let total = tasks.len();
        let completed = tasks.iter().filter(|t| t.completed).count();
        Self {
            total,
            completed,
            remaining: total - completed,
        }
    }

    /// Footer line for the rendering layer
    ///
    /// `None` when the list is empty; a celebration line when everything
    /// is complete; otherwise a remaining-count line with singular/plural
    /// handling.
    #[must_use]
    pub fn footer(&self) -> Option<String> {
        if self.total == 0 {
            return None;
        }
        if self.completed == self.total {
            return Some("🎉 All tasks completed! Great job!".to_string());
        }
        let plural = if self.remaining == 1 { "" } else { "s" };
        Some(format!("{} task{plural} remaining", self.remaining))
    }
}

/// Complete read-only view of one task list state
///
/// This is the entire surface the rendering layer consumes: it is a pure
/// function of the store state and is rebuilt in full after every
/// mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// All tasks, in creation order
    pub tasks: Vec<Task>,
    /// Tasks visible under the current filter, in creation order
    pub visible: Vec<Task>,
    /// The current filter
    pub filter: Filter,
    /// The pending input text
    pub pending: String,
    /// Derived summary counts
    pub summary: Summary,
}

impl Snapshot {
    /// Derives the full view from the current state
    #[must_use]
    pub fn of(state: &TaskListState) -> Self {
        Self {
            tasks: state.tasks.clone(),
            visible: visible_tasks(&state.tasks, state.filter)
                .into_iter()
                .cloned()
                .collect(),
            filter: state.filter,
            pending: state.pending.clone(),
            summary: Summary::of(&state.tasks),
        }
    }

    /// Placeholder text when the visible list is empty, `None` otherwise
    #[must_use]
    pub fn empty_message(&self) -> Option<&'static str> {
        self.visible
            .is_empty()
            .then(|| self.filter.empty_message())
    }
}
