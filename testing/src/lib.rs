//! # Tasklist Testing
//!
//! Testing utilities and helpers for the Tasklist architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A fluent Given-When-Then builder for reducer tests
//!
//! ## Example
//!
//! ```ignore
//! use tasklist_testing::{test_clock, mocks::SequentialIdGenerator};
//! use tasklist_runtime::Store;
//!
//! #[tokio::test]
//! async fn test_task_flow() {
//!     let env = TaskEnvironment::new(
//!         Arc::new(test_clock()),
//!         Arc::new(SequentialIdGenerator::new()),
//!     );
//!     let store = Store::new(TaskListState::default(), TaskListReducer::new(), env);
//!
//!     store.send(TaskAction::Add { text: "Buy milk".to_string() }).await;
//!
//!     let count = store.state(|s| s.tasks.len()).await;
//!     assert_eq!(count, 1);
//! }
//! ```

use chrono::{DateTime, Utc};
use tasklist_core::environment::{Clock, IdGenerator};


/// Mock implementations of Environment traits
///
/// - [`FixedClock`]: Deterministic time
/// - [`SequentialIdGenerator`]: Predictable ids
///
/// Mock implementations for testing.
pub mod mocks {
    use super::{Clock, DateTime, IdGenerator, Utc};
    use std::sync::atomic::{AtomicU64, Ordering};
    use uuid::Uuid;

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use tasklist_testing::mocks::FixedClock;
    /// use tasklist_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }

    /// Sequential id generator for deterministic tests
    ///
    /// Produces ids derived from a monotonically increasing counter, so
    /// the Nth generated id is always the same across runs and two calls
    /// in immediate succession can never collide.
    ///
    /// # Example
    ///
    /// ```
    /// use tasklist_testing::mocks::SequentialIdGenerator;
    /// use tasklist_core::environment::IdGenerator;
    ///
    /// let ids = SequentialIdGenerator::new();
    /// let first = ids.next_id();
    /// let second = ids.next_id();
    /// assert_ne!(first, second);
    /// ```
    #[derive(Debug, Default)]
    pub struct SequentialIdGenerator {
        counter: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a new generator starting at 1
        #[must_use]
        pub fn new() -> Self {
            Self {
                counter: AtomicU64::new(1),
            }
        }

        /// The id that `next_id` would return on the nth call (1-indexed)
        #[must_use]
        pub const fn nth(n: u64) -> Uuid {
            Uuid::from_u64_pair(0, n)
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn next_id(&self) -> Uuid {
            let n = self.counter.fetch_add(1, Ordering::Relaxed);
            Uuid::from_u64_pair(0, n)
        }
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, SequentialIdGenerator, test_clock};
pub use reducer_test::ReducerTest;
