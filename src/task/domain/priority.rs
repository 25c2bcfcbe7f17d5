//! Bounded task priority value object.

use super::{ParsePriorityError, TaskDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordered rank attached to a task, controlling list order.
///
/// Priorities are plain values: [`Priority::up`] and [`Priority::down`]
/// return a new priority and saturate at the bounds instead of wrapping or
/// failing, so callers can step a priority without checking it first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Level 0, the default for new tasks.
    Low,
    /// Level 1.
    Medium,
    /// Level 2, listed first.
    High,
}

impl Priority {
    /// Every priority, lowest first.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Creates a priority from its numeric level.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidPriority`] when `level` is not one
    /// of `0`, `1` or `2`.
    pub const fn new(level: i64) -> Result<Self, TaskDomainError> {
        match level {
            0 => Ok(Self::Low),
            1 => Ok(Self::Medium),
            2 => Ok(Self::High),
            _ => Err(TaskDomainError::InvalidPriority(level)),
        }
    }

    /// Returns the lowest priority.
    #[must_use]
    pub const fn lowest() -> Self {
        Self::Low
    }

    /// Returns the numeric level (`0` for low through `2` for high).
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Low => 0,
            Self::Medium => 1,
            Self::High => 2,
        }
    }

    /// Returns `true` for [`Priority::High`].
    #[must_use]
    pub const fn is_max(self) -> bool {
        matches!(self, Self::High)
    }

    /// Returns `true` for [`Priority::Low`].
    #[must_use]
    pub const fn is_min(self) -> bool {
        matches!(self, Self::Low)
    }

    /// Returns the next priority up, or `self` when already at the maximum.
    #[must_use]
    pub const fn up(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium | Self::High => Self::High,
        }
    }

    /// Returns the next priority down, or `self` when already at the minimum.
    #[must_use]
    pub const fn down(self) -> Self {
        match self {
            Self::High => Self::Medium,
            Self::Medium | Self::Low => Self::Low,
        }
    }

    /// Returns the canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::lowest()
    }
}

impl TryFrom<i64> for Priority {
    type Error = TaskDomainError;

    fn try_from(level: i64) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
