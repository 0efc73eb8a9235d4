use crate::error::CoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A task as stored in the `tasks` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: i64,
    pub start_time: DateTime<Utc>,
    pub stop_time: DateTime<Utc>,
    pub description: String,
    pub theme: String,
    pub is_done: bool,
}

/// A task that has not been assigned an id by the store yet.
///
/// New tasks always start out pending, so there is no `is_done` here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub start_time: DateTime<Utc>,
    pub stop_time: DateTime<Utc>,
    pub description: String,
    pub theme: String,
}

/// How often a task is repeated and how many days lie between repetitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repeat {
    interval_days: u32,
    times: u32,
}

impl Repeat {
    /// A single occurrence with no spacing.
    pub const ONCE: Repeat = Repeat {
        interval_days: 0,
        times: 1,
    };

    /// Validates an explicitly requested repeat: both values must be at least 1.
    pub fn new(interval_days: i64, times: i64) -> Result<Self, CoreError> {
        if interval_days < 1 {
            return Err(CoreError::InvalidRepeatParameter(
                "Repeat days must be greater than 0.".to_string(),
            ));
        }
        if times < 1 {
            return Err(CoreError::InvalidRepeatParameter(
                "Repeat times must be greater than 0.".to_string(),
            ));
        }

        let interval_days = u32::try_from(interval_days).map_err(|_| {
            CoreError::InvalidRepeatParameter(format!("Repeat days too large: {}", interval_days))
        })?;
        let times = u32::try_from(times).map_err(|_| {
            CoreError::InvalidRepeatParameter(format!("Repeat times too large: {}", times))
        })?;

        Ok(Self {
            interval_days,
            times,
        })
    }

    pub fn interval_days(&self) -> u32 {
        self.interval_days
    }

    pub fn times(&self) -> u32 {
        self.times
    }
}

impl Default for Repeat {
    fn default() -> Self {
        Self::ONCE
    }
}

/// Everything the `add` command collected before expansion.
///
/// `description` may contain the placeholders `%d` (0-based repetition index)
/// and `%D` (1-based repetition number).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskTemplate {
    pub start: DateTime<Utc>,
    pub stop: DateTime<Utc>,
    pub description: String,
    pub theme: String,
    pub repeat: Repeat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_repeat_is_once() {
        let repeat = Repeat::default();
        assert_eq!(repeat, Repeat::ONCE);
        assert_eq!(repeat.interval_days(), 0);
        assert_eq!(repeat.times(), 1);
    }

    #[test]
    fn test_valid_repeat() {
        let repeat = Repeat::new(7, 3).unwrap();
        assert_eq!(repeat.interval_days(), 7);
        assert_eq!(repeat.times(), 3);
    }

    #[rstest]
    #[case(0, 3)]
    #[case(-1, 3)]
    #[case(7, 0)]
    #[case(7, -5)]
    #[case(i64::from(u32::MAX) + 1, 1)]
    fn test_invalid_repeat(#[case] days: i64, #[case] times: i64) {
        let err = Repeat::new(days, times).unwrap_err();
        assert!(matches!(err, CoreError::InvalidRepeatParameter(_)));
    }
}
