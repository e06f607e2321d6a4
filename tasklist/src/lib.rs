//! Task list state model: an ordered in-memory task store with filtering
//! and summary derivations.
//!
//! This crate implements a single-session task tracker core:
//!
//! - Add short text tasks, toggle completion, delete (ordered store)
//! - Filter the visible list by completion state
//! - Derive total/completed/remaining counts
//! - Stage pending input text until commit
//!
//! All state lives in memory for the lifetime of the session. Rejections
//! (empty text, unknown ids) are silent no-ops; there is no persistence
//! and no error surface.
//!
//! # Quick Start
//!
//! ```no_run
//! use tasklist::{Snapshot, TaskAction, TaskEnvironment, TaskListReducer, TaskListState};
//! use tasklist_runtime::Store;
//!
//! # async fn example() {
//! // Create environment and store
//! let env = TaskEnvironment::production();
//! let store = Store::new(TaskListState::new(), TaskListReducer::new(), env);
//!
//! // Add a task
//! store.send(TaskAction::Add {
//!     text: "Buy milk".to_string(),
//! }).await;
//!
//! // Toggle it
//! if let Some(id) = store.state(|s| s.tasks.first().map(|t| t.id.clone())).await {
//!     store.send(TaskAction::Toggle { id }).await;
//! }
//!
//! // Read the derived view
//! let snapshot = store.state(Snapshot::of).await;
//! println!("Total tasks: {}", snapshot.summary.total);
//! println!("Completed: {}", snapshot.summary.completed);
//! # }
//! ```

pub mod reducer;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use reducer::{TaskAction, TaskEnvironment, TaskListReducer};
pub use types::{Filter, FilterParseError, Task, TaskId, TaskListState};
pub use view::{Snapshot, Summary, visible_tasks};
