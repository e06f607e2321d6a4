//! Reducer logic for the task list.
//!
//! All four mutating entry points live here: add, toggle, delete, and the
//! filter/pending updates. Rejections are silent by design: empty text and
//! unknown ids leave state untouched and surface nowhere except a
//! debug-level trace record.

use crate::types::{Filter, Task, TaskId, TaskListState};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tasklist_core::environment::{Clock, IdGenerator, RandomIdGenerator, SystemClock};
use tasklist_core::reducer::Reducer;

/// Environment dependencies for the task list reducer
#[derive(Clone)]
pub struct TaskEnvironment {
    /// Clock for creation timestamps
    pub clock: Arc<dyn Clock>,
    /// Source of fresh task ids
    pub ids: Arc<dyn IdGenerator>,
}

impl TaskEnvironment {
    /// Creates a new `TaskEnvironment`
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { clock, ids }
    }

    /// Production environment: system clock and random v4 ids
    #[must_use]
    pub fn production() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(RandomIdGenerator))
    }
}

/// Actions the task list processes
///
/// These are the only entry points that mutate session state. Each one
/// runs to completion before the next is processed; there are no
/// multi-step protocols and no ordering dependencies beyond "operate on
/// the snapshot current at call time".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum TaskAction {
    /// Add a task with the given raw text
    ///
    /// The text is trimmed first; if nothing remains, the action is a
    /// silent no-op and no task is created.
    Add {
        /// Raw text, trimmed at the add boundary
        text: String,
    },

    /// Flip the completion flag of the task with the given id
    ///
    /// Unknown ids are silent no-ops.
    Toggle {
        /// Task to toggle
        id: TaskId,
    },

    /// Remove the task with the given id
    ///
    /// Unknown ids are silent no-ops; the relative order of the remaining
    /// tasks is preserved.
    Delete {
        /// Task to delete
        id: TaskId,
    },

    /// Replace the current view filter
    SetFilter {
        /// The new filter
        filter: Filter,
    },

    /// Replace the pending input text verbatim (no trimming at this stage)
    SetPending {
        /// The new pending text
        text: String,
    },

    /// Commit the pending text as a new task
    ///
    /// The pending buffer is cleared whether or not the text is accepted,
    /// matching "the box always clears after pressing Add".
    Commit,
}

/// Reducer for the task list
#[derive(Clone, Copy, Debug, Default)]
pub struct TaskListReducer;

impl TaskListReducer {
    /// Creates a new `TaskListReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Shared add path for `Add` and `Commit`
    ///
    /// Trims the raw text and appends a fresh task, or does nothing when
    /// nothing remains after trimming.
    fn push_task(state: &mut TaskListState, raw_text: &str, env: &TaskEnvironment) {
        let text = raw_text.trim();
        if text.is_empty() {
            tracing::debug!("rejected empty task text");
            return;
        }

        let task = Task::new(
            TaskId::from_uuid(env.ids.next_id()),
            text.to_string(),
            env.clock.now(),
        );
        tracing::debug!(id = %task.id, "task added");
        state.tasks.push(task);
    }
}

impl Reducer for TaskListReducer {
    type State = TaskListState;
    type Action = TaskAction;
    type Environment = TaskEnvironment;

    fn reduce(&self, state: &mut Self::State, action: Self::Action, env: &Self::Environment) {
        match action {
            TaskAction::Add { text } => {
                Self::push_task(state, &text, env);
            }

            TaskAction::Toggle { id } => {
                if let Some(task) = state.tasks.iter_mut().find(|t| t.id == id) {
                    task.toggle();
                } else {
                    tracing::debug!(%id, "toggle for unknown id ignored");
                }
            }

            TaskAction::Delete { id } => {
                let before = state.tasks.len();
                state.tasks.retain(|t| t.id != id);
                if state.tasks.len() == before {
                    tracing::debug!(%id, "delete for unknown id ignored");
                }
            }

            TaskAction::SetFilter { filter } => {
                state.filter = filter;
            }

            TaskAction::SetPending { text } => {
                state.pending = text;
            }

            TaskAction::Commit => {
                // Clears even when the text is rejected
                let text = std::mem::take(&mut state.pending);
                Self::push_task(state, &text, env);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tasklist_testing::mocks::SequentialIdGenerator;
    use tasklist_testing::{ReducerTest, test_clock};

    fn test_env() -> TaskEnvironment {
        TaskEnvironment::new(
            Arc::new(test_clock()),
            Arc::new(SequentialIdGenerator::new()),
        )
    }

    #[test]
    fn add_appends_a_trimmed_task() {
        ReducerTest::new(TaskListReducer::new())
            .with_env(test_env())
            .given_state(TaskListState::new())
            .when_action(TaskAction::Add {
                text: "  Buy milk  ".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.count(), 1);
                let task = &state.tasks[0];
                assert_eq!(task.text, "Buy milk");
                assert!(!task.completed);
                assert_eq!(task.created_at, test_clock().now());
            })
            .run();
    }

    #[test]
    fn add_rejects_empty_and_whitespace_text() {
        ReducerTest::new(TaskListReducer::new())
            .with_env(test_env())
            .given_state(TaskListState::new())
            .when_action(TaskAction::Add {
                text: String::new(),
            })
            .when_action(TaskAction::Add {
                text: "   ".to_string(),
            })
            .then_state(|state| {
                assert_eq!(state.count(), 0);
            })
            .run();
    }

    #[test]
    fn adds_assign_unique_ids_in_creation_order() {
        ReducerTest::new(TaskListReducer::new())
            .with_env(test_env())
            .given_state(TaskListState::new())
            .when_action(TaskAction::Add {
                text: "A".to_string(),
            })
            .when_action(TaskAction::Add {
                text: "B".to_string(),
            })
            .when_action(TaskAction::Add {
                text: "C".to_string(),
            })
            .then_state(|state| {
                let ids: Vec<_> = state.tasks.iter().map(|t| t.id.clone()).collect();
                assert_eq!(
                    ids,
                    vec![
                        TaskId::from_uuid(SequentialIdGenerator::nth(1)),
                        TaskId::from_uuid(SequentialIdGenerator::nth(2)),
                        TaskId::from_uuid(SequentialIdGenerator::nth(3)),
                    ]
                );
                let texts: Vec<_> = state.tasks.iter().map(|t| t.text.as_str()).collect();
                assert_eq!(texts, vec!["A", "B", "C"]);
            })
            .run();
    }

    #[test]
    fn toggle_flips_only_the_matching_task() {
        let id = TaskId::from_uuid(SequentialIdGenerator::nth(1));

        ReducerTest::new(TaskListReducer::new())
            .with_env(test_env())
            .given_state(TaskListState::new())
            .when_action(TaskAction::Add {
                text: "Buy milk".to_string(),
            })
            .when_action(TaskAction::Add {
                text: "Walk dog".to_string(),
            })
            .when_action(TaskAction::Toggle { id: id.clone() })
            .then_state(move |state| {
                assert!(state.get(&id).is_some_and(|t| t.completed));
                assert!(!state.tasks[1].completed);
            })
            .run();
    }

    #[test]
    fn toggle_twice_restores_the_original_flag() {
        let id = TaskId::from_uuid(SequentialIdGenerator::nth(1));

        ReducerTest::new(TaskListReducer::new())
            .with_env(test_env())
            .given_state(TaskListState::new())
            .when_action(TaskAction::Add {
                text: "Buy milk".to_string(),
            })
            .when_action(TaskAction::Toggle { id: id.clone() })
            .when_action(TaskAction::Toggle { id: id.clone() })
            .then_state(move |state| {
                assert!(state.get(&id).is_some_and(|t| !t.completed));
            })
            .run();
    }

    #[test]
    fn toggle_unknown_id_leaves_state_identical() {
        let reducer = TaskListReducer::new();
        let env = test_env();

        let mut state = TaskListState::new();
        reducer.reduce(
            &mut state,
            TaskAction::Add {
                text: "Buy milk".to_string(),
            },
            &env,
        );
        let before = state.clone();

        reducer.reduce(
            &mut state,
            TaskAction::Toggle { id: TaskId::new() },
            &env,
        );
        assert_eq!(state, before);
    }

    #[test]
    fn delete_removes_exactly_one_and_preserves_order() {
        let second = TaskId::from_uuid(SequentialIdGenerator::nth(2));

        ReducerTest::new(TaskListReducer::new())
            .with_env(test_env())
            .given_state(TaskListState::new())
            .when_action(TaskAction::Add {
                text: "A".to_string(),
            })
            .when_action(TaskAction::Add {
                text: "B".to_string(),
            })
            .when_action(TaskAction::Add {
                text: "C".to_string(),
            })
            .when_action(TaskAction::Delete { id: second })
            .then_state(|state| {
                let texts: Vec<_> = state.tasks.iter().map(|t| t.text.as_str()).collect();
                assert_eq!(texts, vec!["A", "C"]);
            })
            .run();
    }

    #[test]
    fn delete_unknown_id_leaves_state_identical() {
        let reducer = TaskListReducer::new();
        let env = test_env();

        let mut state = TaskListState::new();
        reducer.reduce(
            &mut state,
            TaskAction::Add {
                text: "Buy milk".to_string(),
            },
            &env,
        );
        let before = state.clone();

        reducer.reduce(
            &mut state,
            TaskAction::Delete { id: TaskId::new() },
            &env,
        );
        assert_eq!(state, before);
    }

    #[test]
    fn set_filter_replaces_the_filter() {
        ReducerTest::new(TaskListReducer::new())
            .with_env(test_env())
            .given_state(TaskListState::new())
            .when_action(TaskAction::SetFilter {
                filter: Filter::Active,
            })
            .then_state(|state| {
                assert_eq!(state.filter, Filter::Active);
            })
            .run();
    }

    #[test]
    fn set_pending_stores_text_verbatim() {
        ReducerTest::new(TaskListReducer::new())
            .with_env(test_env())
            .given_state(TaskListState::new())
            .when_action(TaskAction::SetPending {
                text: "  half-typed ".to_string(),
            })
            .then_state(|state| {
                // No trimming until commit
                assert_eq!(state.pending, "  half-typed ");
            })
            .run();
    }

    #[test]
    fn commit_adds_the_pending_text_and_clears_it() {
        ReducerTest::new(TaskListReducer::new())
            .with_env(test_env())
            .given_state(TaskListState::new())
            .when_action(TaskAction::SetPending {
                text: " Walk dog ".to_string(),
            })
            .when_action(TaskAction::Commit)
            .then_state(|state| {
                assert_eq!(state.count(), 1);
                assert_eq!(state.tasks[0].text, "Walk dog");
                assert_eq!(state.pending, "");
            })
            .run();
    }

    #[test]
    fn rejected_commit_still_clears_pending() {
        ReducerTest::new(TaskListReducer::new())
            .with_env(test_env())
            .given_state(TaskListState::new())
            .when_action(TaskAction::SetPending {
                text: "   ".to_string(),
            })
            .when_action(TaskAction::Commit)
            .then_state(|state| {
                assert_eq!(state.count(), 0);
                assert_eq!(state.pending, "");
            })
            .run();
    }

    #[test]
    fn commit_on_empty_pending_is_idempotent() {
        ReducerTest::new(TaskListReducer::new())
            .with_env(test_env())
            .given_state(TaskListState::new())
            .when_action(TaskAction::Commit)
            .then_state(|state| {
                assert_eq!(state.count(), 0);
                assert_eq!(state.pending, "");
            })
            .run();
    }
}
