use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use owo_colors::{OwoColorize, Style};
use tracing::info;
use twodo_core::clock::Clock;
use twodo_core::models::{Repeat, TaskTemplate};
use twodo_core::recurrence::RecurrenceExpander;
use twodo_core::repository::TaskRepository;
use twodo_core::timeparse::PartialTimeParser;

use crate::cli::AddCommand;
use crate::views::line::{render_task, TimeDisplay};

pub async fn add_task(
    repo: &impl TaskRepository,
    command: AddCommand,
    clock: &impl Clock,
    display: &TimeDisplay,
) -> Result<()> {
    let now = clock.now();
    let parser = PartialTimeParser::new(display.timezone);
    let template = build_template(command, &parser, now)?;

    let records = RecurrenceExpander::expand(&template)?;
    let added = repo.add_tasks(records).await?;
    info!(count = added.len(), theme = %template.theme, "added tasks");

    let success_style = Style::new().green().bold();
    for task in &added {
        println!("{} {}", "Added".style(success_style), render_task(task, now, display));
    }

    Ok(())
}

/// Resolves both times and the repeat flag of an `add` command.
pub fn build_template(
    command: AddCommand,
    parser: &PartialTimeParser,
    now: DateTime<Utc>,
) -> Result<TaskTemplate> {
    let start = parser
        .parse(&command.start, now)
        .context("Error parsing start time")?;
    let stop = parser
        .parse(&command.stop, now)
        .context("Error parsing stop time")?;

    let repeat = match command.repeat.as_deref() {
        Some([days, times]) => Repeat::new(*days, *times)?,
        Some(values) => {
            anyhow::bail!("--repeat takes DAYS and TIMES, got {} value(s)", values.len())
        }
        None => Repeat::ONCE,
    };

    Ok(TaskTemplate {
        start,
        stop,
        description: command.description,
        theme: command.theme,
        repeat,
    })
}
