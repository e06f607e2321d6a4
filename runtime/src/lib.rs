//! # Tasklist Runtime
//!
//! Runtime implementation for the Tasklist architecture.
//!
//! This crate provides the Store runtime that owns session state and
//! serializes reducer execution.
//!
//! ## Core Components
//!
//! - **Store**: The runtime that manages state and dispatches actions
//! - **Mutation Queue**: The write lock inside the Store; every mutation
//!   runs to completion before the next user-triggered event is processed
//! - **Snapshot Channel**: After every mutation the Store publishes the
//!   full post-mutation state, so observers re-derive their views from
//!   scratch rather than patching them incrementally
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_runtime::Store;
//!
//! let store = Store::new(
//!     initial_state,
//!     my_reducer,
//!     environment,
//! );
//!
//! // Send an action
//! store.send(Action::DoSomething).await;
//!
//! // Read state
//! let value = store.state(|s| s.some_field).await;
//! ```

use tasklist_core::reducer::Reducer;
use std::sync::Arc;
use tokio::sync::{RwLock, watch};

/// Store runtime for coordinating reducer execution.
pub mod store {
    use super::{Arc, Reducer, RwLock, watch};

    /// The Store - runtime coordinator for a reducer
    ///
    /// The Store manages:
    /// 1. State (behind `RwLock`, the single mutation queue)
    /// 2. Reducer (business logic)
    /// 3. Environment (injected dependencies)
    /// 4. Snapshot publication (full state after every mutation)
    ///
    /// # Type Parameters
    ///
    /// - `S`: State type
    /// - `A`: Action type
    /// - `E`: Environment type
    /// - `R`: Reducer implementation
    ///
    /// # Example
    ///
    /// ```ignore
    /// let store = Store::new(
    ///     TaskListState::default(),
    ///     TaskListReducer::new(),
    ///     production_environment(),
    /// );
    ///
    /// store.send(TaskAction::Add {
    ///     text: "Buy milk".to_string(),
    /// }).await;
    /// ```
    pub struct Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E>,
    {
        state: Arc<RwLock<S>>,
        reducer: R,
        environment: E,
        /// Snapshot channel publishing the full state after each mutation.
        ///
        /// Observers (a rendering layer, tests) hold the receiving end and
        /// recompute their derived views from each snapshot. There is no
        /// partial-update or diffing contract.
        snapshot: watch::Sender<S>,
        _marker: std::marker::PhantomData<A>,
    }

    impl<S, A, E, R> Clone for Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Clone,
        E: Clone,
    {
        fn clone(&self) -> Self {
            Self {
                state: Arc::clone(&self.state),
                reducer: self.reducer.clone(),
                environment: self.environment.clone(),
                snapshot: self.snapshot.clone(),
                _marker: std::marker::PhantomData,
            }
        }
    }

    impl<S, A, E, R> Store<S, A, E, R>
    where
        R: Reducer<State = S, Action = A, Environment = E> + Send + Sync + 'static,
        S: Clone + Send + Sync + 'static,
        A: Send + 'static,
        E: Send + Sync + 'static,
    {
        /// Create a new store with initial state, reducer, and environment
        ///
        /// # Arguments
        ///
        /// - `initial_state`: The starting state for the store
        /// - `reducer`: The reducer implementation (business logic)
        /// - `environment`: Injected dependencies
        ///
        /// # Returns
        ///
        /// A new Store instance ready to process actions
        #[must_use]
        pub fn new(initial_state: S, reducer: R, environment: E) -> Self {
            let (snapshot, _) = watch::channel(initial_state.clone());

            Self {
                state: Arc::new(RwLock::new(initial_state)),
                reducer,
                environment,
                snapshot,
                _marker: std::marker::PhantomData,
            }
        }

        /// Send an action to the store
        ///
        /// This is the primary way to interact with the store:
        /// 1. Acquires the write lock on state
        /// 2. Calls the reducer with (state, action, environment)
        /// 3. Publishes the full post-mutation snapshot to observers
        ///
        /// The reducer runs to completion while the write lock is held, so
        /// concurrent `send()` calls serialize: the mutual exclusion a
        /// single-threaded event loop gives for free is preserved here
        /// explicitly even when actions arrive from multiple event sources.
        ///
        /// # Arguments
        ///
        /// - `action`: The action to process
        ///
        /// # Panics
        ///
        /// If the reducer panics, the panic will propagate and poison the
        /// store. Reducers should be pure functions that do not panic.
        #[tracing::instrument(skip(self, action), name = "store_send")]
        pub async fn send(&self, action: A) {
            let mut state = self.state.write().await;

            tracing::trace!("Calling reducer");
            self.reducer.reduce(&mut state, action, &self.environment);

            // Receivers may all be dropped; the send result is irrelevant
            let _ = self.snapshot.send(state.clone());
            tracing::debug!("Action processed, snapshot published");
        }

        /// Read current state via a closure
        ///
        /// Access state through a closure to ensure the lock is released
        /// promptly:
        ///
        /// ```ignore
        /// let task_count = store.state(|s| s.tasks.len()).await;
        /// ```
        ///
        /// # Arguments
        ///
        /// - `f`: Closure that receives a reference to state and returns a value
        ///
        /// # Returns
        ///
        /// The value returned by the closure
        pub async fn state<F, T>(&self, f: F) -> T
        where
            F: FnOnce(&S) -> T,
        {
            let state = self.state.read().await;
            f(&state)
        }

        /// Subscribe to post-mutation state snapshots
        ///
        /// The receiver yields the full state after every mutation. The
        /// initial value is the state at subscription time, so a freshly
        /// attached observer can render immediately without waiting for
        /// the next action.
        #[must_use]
        pub fn subscribe(&self) -> watch::Receiver<S> {
            self.snapshot.subscribe()
        }
    }
}

pub use store::Store;

#[cfg(test)]
mod tests {
    use super::Store;
    use tasklist_core::reducer::Reducer;

    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    struct TestState {
        count: i32,
    }

    #[derive(Clone, Debug)]
    enum TestAction {
        Increment,
        Decrement,
    }

    #[derive(Clone)]
    struct TestReducer;

    #[derive(Clone)]
    struct TestEnv;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;
        type Environment = TestEnv;

        fn reduce(&self, state: &mut Self::State, action: Self::Action, _env: &Self::Environment) {
            match action {
                TestAction::Increment => state.count += 1,
                TestAction::Decrement => state.count -= 1,
            }
        }
    }

    #[tokio::test]
    async fn send_mutates_state() {
        let store = Store::new(TestState::default(), TestReducer, TestEnv);

        store.send(TestAction::Increment).await;
        store.send(TestAction::Increment).await;
        store.send(TestAction::Decrement).await;

        let count = store.state(|s| s.count).await;
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn concurrent_sends_serialize() {
        let store = Store::new(TestState::default(), TestReducer, TestEnv);

        let handles: Vec<_> = (0..10)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move {
                    store.send(TestAction::Increment).await;
                })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap();
        }

        let count = store.state(|s| s.count).await;
        assert_eq!(count, 10);
    }

    #[tokio::test]
    async fn subscribers_see_every_snapshot_eventually() {
        let store = Store::new(TestState::default(), TestReducer, TestEnv);
        let mut rx = store.subscribe();

        // Initial value is the subscription-time state
        assert_eq!(rx.borrow().count, 0);

        store.send(TestAction::Increment).await;
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().count, 1);
    }
}
