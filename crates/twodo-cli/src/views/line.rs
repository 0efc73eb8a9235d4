use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use owo_colors::OwoColorize;
use twodo_core::error::CoreError;
use twodo_core::models::Task;

/// How task times are shown: zone and `chrono` format.
#[derive(Debug, Clone)]
pub struct TimeDisplay {
    pub timezone: Tz,
    pub format: String,
}

impl TimeDisplay {
    /// Fails with [`CoreError::InvalidInput`] when `format` contains a
    /// specifier `chrono` does not know.
    pub fn new(timezone: Tz, format: impl Into<String>) -> Result<Self, CoreError> {
        let format = format.into();
        if StrftimeItems::new(&format).any(|item| matches!(item, Item::Error)) {
            return Err(CoreError::InvalidInput(format!(
                "Invalid display format: '{}'",
                format
            )));
        }

        Ok(Self { timezone, format })
    }

    pub fn format(&self, instant: DateTime<Utc>) -> String {
        instant
            .with_timezone(&self.timezone)
            .format(&self.format)
            .to_string()
    }
}

/// Formats a task as one colored line:
/// `0042: Mar15 1504 - Mar15 1600 [✓] theme, description`.
///
/// Times already behind `now` are red, upcoming ones green.
pub fn render_task(task: &Task, now: DateTime<Utc>, display: &TimeDisplay) -> String {
    let id = format!("{:04}", task.id);
    let done = if task.is_done {
        "✓".green().to_string()
    } else {
        " ".to_string()
    };

    format!(
        "{}: {} - {} [{}] {}, {}",
        id.blue(),
        render_time(task.start_time, now, display),
        render_time(task.stop_time, now, display),
        done,
        task.theme.bright_black(),
        task.description.bright_black()
    )
}

fn render_time(instant: DateTime<Utc>, now: DateTime<Utc>, display: &TimeDisplay) -> String {
    let text = display.format(instant);
    if now > instant {
        text.red().to_string()
    } else {
        text.green().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn task(is_done: bool) -> Task {
        Task {
            id: 42,
            start_time: Utc.with_ymd_and_hms(2024, 3, 15, 14, 4, 0).unwrap(),
            stop_time: Utc.with_ymd_and_hms(2024, 3, 15, 15, 0, 0).unwrap(),
            description: "Write report".to_string(),
            theme: "work".to_string(),
            is_done,
        }
    }

    fn oslo() -> TimeDisplay {
        TimeDisplay::new(chrono_tz::Europe::Oslo, "%b%d %H%M").unwrap()
    }

    #[test]
    fn test_unknown_format_specifier_rejected() {
        let err = TimeDisplay::new(chrono_tz::UTC, "%Q %H%M").unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(ref m) if m.contains("%Q")));

        assert!(TimeDisplay::new(chrono_tz::UTC, "%Y-%m-%d %H:%M").is_ok());
    }

    #[test]
    fn test_times_in_local_zone() {
        let display = oslo();
        let instant = Utc.with_ymd_and_hms(2024, 3, 15, 14, 4, 0).unwrap();
        assert_eq!(display.format(instant), "Mar15 1504");
    }

    #[test]
    fn test_line_layout() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap();
        let line = render_task(&task(false), now, &oslo());

        let expected = format!(
            "{}: {} - {} [ ] {}, {}",
            "0042".blue(),
            "Mar15 1504".green(),
            "Mar15 1600".green(),
            "work".bright_black(),
            "Write report".bright_black()
        );
        assert_eq!(line, expected);
    }

    #[test]
    fn test_past_times_are_red() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 14, 30, 0).unwrap();
        let line = render_task(&task(false), now, &oslo());

        assert!(line.contains(&"Mar15 1504".red().to_string()));
        assert!(line.contains(&"Mar15 1600".green().to_string()));
    }

    #[test]
    fn test_done_marker() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 9, 0, 0).unwrap();
        assert!(render_task(&task(true), now, &oslo()).contains(&"✓".green().to_string()));
        assert!(!render_task(&task(false), now, &oslo()).contains('✓'));
    }
}
