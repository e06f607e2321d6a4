//! Domain types for the task list.
//!
//! A task list is an ordered collection of short text tasks plus two pieces
//! of view-facing state: the active completion filter and the pending input
//! buffer. Display order always equals creation order, so the collection is
//! a sequence, never a set.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a task
///
/// Opaque, stable for the task's lifetime, compared only for equality.
/// Ids are never reused within a session: deleted ids simply vanish.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new random `TaskId`
    ///
    /// Production code obtains ids from the injected
    /// [`IdGenerator`](tasklist_core::environment::IdGenerator) instead;
    /// this constructor exists for tests and ad hoc callers.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `TaskId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,
    /// Text content; non-empty, already trimmed, immutable after creation
    pub text: String,
    /// Whether the task is completed
    pub completed: bool,
    /// When the task was created; display-only, nothing orders or expires by it
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task
    ///
    /// Callers are responsible for passing trimmed, non-empty text; the
    /// reducer enforces that at the `Add` boundary and it is not re-checked
    /// here.
    #[must_use]
    pub const fn new(id: TaskId, text: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at,
        }
    }

    /// Flips the completion flag
    pub const fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Human-readable rendering of the creation time
    #[must_use]
    pub fn created_at_display(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// View-restriction mode applied to the task collection for display
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    /// Show every task
    #[default]
    All,
    /// Show only tasks that are not completed
    Active,
    /// Show only completed tasks
    Completed,
}

impl Filter {
    /// All three variants, in display order
    pub const VARIANTS: [Self; 3] = [Self::All, Self::Active, Self::Completed];

    /// Whether a task is visible under this filter
    #[must_use]
    pub const fn matches(self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Active => !task.completed,
            Self::Completed => task.completed,
        }
    }

    /// Placeholder text shown when this filter has nothing to display
    #[must_use]
    pub const fn empty_message(self) -> &'static str {
        match self {
            Self::All => "No tasks yet. Add one above!",
            Self::Active => "No active tasks!",
            Self::Completed => "No completed tasks yet!",
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Completed => "completed",
        };
        write!(f, "{name}")
    }
}

/// Error returned when a filter name cannot be parsed
///
/// Inside the core an invalid filter is unrepresentable (`Filter` is a
/// closed enum); this error exists only at the text boundary, before any
/// action is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown filter {0:?} (expected one of: all, active, completed)")]
pub struct FilterParseError(pub String);

impl FromStr for Filter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "active" => Ok(Self::Active),
            "completed" => Ok(Self::Completed),
            other => Err(FilterParseError(other.to_string())),
        }
    }
}

/// State of the task list
///
/// One session-scoped container holding everything the rendering layer is
/// a pure function of: the ordered tasks, the active filter, and the
/// pending (uncommitted) input text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskListState {
    /// All tasks, in creation order
    pub tasks: Vec<Task>,
    /// Current view filter
    pub filter: Filter,
    /// Uncommitted input text, replaced verbatim by `SetPending`
    pub pending: String,
}

impl TaskListState {
    /// Creates a new empty task list
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of tasks
    #[must_use]
    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    /// Returns a task by id
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| &t.id == id)
    }

    /// Checks if a task exists
    #[must_use]
    pub fn exists(&self, id: &TaskId) -> bool {
        self.get(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_id_display() {
        let id = TaskId::new();
        let display = format!("{id}");
        assert!(!display.is_empty());
    }

    #[test]
    fn task_new() {
        let id = TaskId::new();
        let now = Utc::now();
        let task = Task::new(id.clone(), "Buy milk".to_string(), now);

        assert_eq!(task.id, id);
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
        assert_eq!(task.created_at, now);
    }

    #[test]
    fn task_toggle_is_an_involution() {
        let mut task = Task::new(TaskId::new(), "Walk dog".to_string(), Utc::now());

        task.toggle();
        assert!(task.completed);

        task.toggle();
        assert!(!task.completed);
    }

    #[test]
    fn filter_matches() {
        let mut task = Task::new(TaskId::new(), "Buy milk".to_string(), Utc::now());

        assert!(Filter::All.matches(&task));
        assert!(Filter::Active.matches(&task));
        assert!(!Filter::Completed.matches(&task));

        task.toggle();
        assert!(Filter::All.matches(&task));
        assert!(!Filter::Active.matches(&task));
        assert!(Filter::Completed.matches(&task));
    }

    #[test]
    fn filter_round_trips_through_its_name() {
        for filter in Filter::VARIANTS {
            let name = filter.to_string();
            assert_eq!(name.parse::<Filter>(), Ok(filter));
        }
    }

    #[test]
    fn filter_rejects_unknown_names() {
        let err = "done".parse::<Filter>().unwrap_err();
        assert_eq!(err, FilterParseError("done".to_string()));
        assert!("ALL".parse::<Filter>().is_err());
        assert!("".parse::<Filter>().is_err());
    }

    #[test]
    fn state_lookup() {
        let mut state = TaskListState::new();
        assert_eq!(state.count(), 0);

        let id = TaskId::new();
        state
            .tasks
            .push(Task::new(id.clone(), "Buy milk".to_string(), Utc::now()));

        assert_eq!(state.count(), 1);
        assert!(state.exists(&id));
        assert!(!state.exists(&TaskId::new()));
    }
}
