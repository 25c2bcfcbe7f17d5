//! Sequential identifier generator.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::task::{
    domain::{TaskDomainError, TaskId},
    ports::IdGenerator,
};

/// Monotonic counter issuing task identifiers `1, 2, 3, ...`.
///
/// The counter lives in the instance, not in global state, and is never
/// reset. Share one instance (behind an [`Arc`](std::sync::Arc)) between
/// every factory that feeds the same repository.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    last: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose first identifier is `1`.
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_after(0)
    }

    /// Creates a generator whose first identifier is `initial + 1`.
    ///
    /// A generator starting after [`u64::MAX`] is exhausted from the start.
    #[must_use]
    pub const fn starting_after(initial: u64) -> Self {
        Self {
            last: AtomicU64::new(initial),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> Result<TaskId, TaskDomainError> {
        self.last
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |last| {
                last.checked_add(1)
            })
            .map(|previous| TaskId::new(previous + 1))
            .map_err(|_| TaskDomainError::IdsExhausted)
    }
}
