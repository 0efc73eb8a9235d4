use crate::error::CoreError;
use crate::models::{NewTask, TaskTemplate};
use chrono::{DateTime, Duration, Utc};
use tracing::debug;

/// Largest number of repetitions a single template may expand to.
pub const MAX_REPETITIONS: u32 = 10_000;

/// Turns a [`TaskTemplate`] into the concrete tasks to store.
pub struct RecurrenceExpander;

impl RecurrenceExpander {
    /// Produces one task per repetition, in repetition order.
    ///
    /// Repetition `k` starts and stops `k * interval_days` days after the
    /// template, so the distance between start and stop never changes. Theme is
    /// copied as is; the description goes through [`substitute_placeholders`].
    ///
    /// # Errors
    ///
    /// [`CoreError::InvalidRepeatParameter`] when the count exceeds
    /// [`MAX_REPETITIONS`] or the last repetition leaves the representable
    /// date range. Both are checked before anything is allocated.
    pub fn expand(template: &TaskTemplate) -> Result<Vec<NewTask>, CoreError> {
        let times = template.repeat.times();
        if times > MAX_REPETITIONS {
            return Err(CoreError::InvalidRepeatParameter(format!(
                "Repeat times must be at most {}, got {}.",
                MAX_REPETITIONS, times
            )));
        }
        // offsets grow with the index, so the last repetition is the furthest out
        Self::occurrence(template, times.saturating_sub(1))?;

        let tasks = (0..times)
            .map(|index| Self::occurrence(template, index))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            count = tasks.len(),
            interval_days = template.repeat.interval_days(),
            "expanded task template"
        );
        Ok(tasks)
    }

    /// Builds repetition `index` (0-based) of `template`.
    pub fn occurrence(template: &TaskTemplate, index: u32) -> Result<NewTask, CoreError> {
        let offset = i64::from(index)
            .checked_mul(i64::from(template.repeat.interval_days()))
            .and_then(Duration::try_days)
            .ok_or_else(|| out_of_range(index))?;

        Ok(NewTask {
            start_time: shift(template.start, offset, index)?,
            stop_time: shift(template.stop, offset, index)?,
            description: substitute_placeholders(&template.description, index),
            theme: template.theme.clone(),
        })
    }
}

/// Replaces `%d` with `index` and `%D` with `index + 1`.
///
/// Both placeholders are replaced in one left-to-right pass over the original
/// text, so neither replacement sees the output of the other.
pub fn substitute_placeholders(description: &str, index: u32) -> String {
    let mut result = String::with_capacity(description.len());
    let mut chars = description.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '%' {
            match chars.peek() {
                Some('d') => {
                    chars.next();
                    result.push_str(&index.to_string());
                    continue;
                }
                Some('D') => {
                    chars.next();
                    result.push_str(&(u64::from(index) + 1).to_string());
                    continue;
                }
                _ => {}
            }
        }
        result.push(c);
    }

    result
}

fn shift(base: DateTime<Utc>, offset: Duration, index: u32) -> Result<DateTime<Utc>, CoreError> {
    base.checked_add_signed(offset)
        .ok_or_else(|| out_of_range(index))
}

fn out_of_range(index: u32) -> CoreError {
    CoreError::InvalidRepeatParameter(format!(
        "Repetition {} falls outside the supported date range",
        index + 1
    ))
}
