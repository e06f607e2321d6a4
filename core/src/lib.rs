//! # Tasklist Core
//!
//! Core traits and types for the Tasklist architecture.
//!
//! This crate provides the fundamental abstractions for building a
//! session-scoped, in-memory state model using the Reducer pattern.
//!
//! ## Core Concepts
//!
//! - **State**: Domain state for a feature, owned data behind the store
//! - **Action**: All possible inputs to a reducer (user-triggered events)
//! - **Reducer**: Pure function `(State, Action, Environment) → State`
//! - **Environment**: Injected dependencies via traits (clock, id source)
//!
//! ## Architecture Principles
//!
//! - Functional Core, Imperative Shell
//! - Unidirectional Data Flow
//! - Dependency Injection via Environment
//! - Every mutation runs to completion before the next is processed
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_core::reducer::Reducer;
//!
//! // Define your state
//! #[derive(Clone, Debug, Default)]
//! struct CounterState {
//!     count: i64,
//! }
//!
//! // Define your actions
//! #[derive(Clone, Debug)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! // Implement the reducer
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = CounterEnvironment;
//!
//!     fn reduce(&self, state: &mut CounterState, action: CounterAction, env: &CounterEnvironment) {
//!         // Business logic goes here
//!     }
//! }
//! ```

// Re-export commonly used types
pub use chrono::{DateTime, Utc};
pub use uuid::Uuid;

/// Reducer module - The core trait for business logic
///
/// Reducers are pure functions: `(State, Action, Environment) → State`
///
/// They contain all business logic and are deterministic and testable.
/// There is no effect channel: every operation in this domain runs to
/// completion synchronously inside the reducer, and invalid inputs are
/// silent no-ops rather than surfaced errors.
pub mod reducer {
    /// The Reducer trait - core abstraction for business logic
    ///
    /// # Type Parameters
    ///
    /// - `State`: The domain state this reducer operates on
    /// - `Action`: The action type this reducer processes
    /// - `Environment`: The injected dependencies this reducer needs
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for TaskListReducer {
    ///     type State = TaskListState;
    ///     type Action = TaskAction;
    ///     type Environment = TaskEnvironment;
    ///
    ///     fn reduce(
    ///         &self,
    ///         state: &mut TaskListState,
    ///         action: TaskAction,
    ///         env: &TaskEnvironment,
    ///     ) {
    ///         match action {
    ///             TaskAction::Add { text } => {
    ///                 // Business logic here
    ///             }
    ///             _ => {}
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// The environment type with injected dependencies
        type Environment;

        /// Reduce an action into state changes
        ///
        /// This is a pure function that:
        /// 1. Validates the action against current state
        /// 2. Updates state in place, or leaves it untouched on rejection
        ///
        /// # Arguments
        ///
        /// - `state`: Mutable reference to current state
        /// - `action`: The action to process
        /// - `env`: Reference to injected dependencies
        fn reduce(
            &self,
            state: &mut Self::State,
            action: Self::Action,
            env: &Self::Environment,
        );
    }
}

/// Environment module - Dependency injection traits
///
/// All external dependencies are abstracted behind traits and injected
/// via the Environment parameter. This keeps reducers deterministic:
/// tests swap in fixed clocks and sequential id sources, production uses
/// the system clock and random ids.
pub mod environment {
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    /// Clock trait - abstracts time operations for testability
    ///
    /// # Examples
    ///
    /// ```ignore
    /// // Production - uses system clock
    /// struct SystemClock;
    /// impl Clock for SystemClock {
    ///     fn now(&self) -> DateTime<Utc> {
    ///         Utc::now()
    ///     }
    /// }
    ///
    /// // Test - fixed time for deterministic tests
    /// struct FixedClock { time: DateTime<Utc> }
    /// impl Clock for FixedClock {
    ///     fn now(&self) -> DateTime<Utc> {
    ///         self.time
    ///     }
    /// }
    /// ```
    pub trait Clock: Send + Sync {
        /// Get the current time
        fn now(&self) -> DateTime<Utc>;
    }

    /// System clock - production [`Clock`] backed by the OS wall clock
    #[derive(Debug, Clone, Copy, Default)]
    pub struct SystemClock;

    impl Clock for SystemClock {
        fn now(&self) -> DateTime<Utc> {
            Utc::now()
        }
    }

    /// `IdGenerator` trait - abstracts identifier generation
    ///
    /// Identifiers must be unique across everything simultaneously held in
    /// one session, including two generations in immediate succession.
    /// Injecting the source lets tests use a predictable sequence while
    /// production draws random UUIDs.
    pub trait IdGenerator: Send + Sync {
        /// Produce the next unique identifier
        fn next_id(&self) -> Uuid;
    }

    /// Random id generator - production [`IdGenerator`] drawing v4 UUIDs
    ///
    /// Collision probability is negligible for any session-sized store,
    /// and two calls in immediate succession cannot collide the way a
    /// wall-clock-derived id could.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct RandomIdGenerator;

    impl IdGenerator for RandomIdGenerator {
        fn next_id(&self) -> Uuid {
            Uuid::new_v4()
        }
    }
}
