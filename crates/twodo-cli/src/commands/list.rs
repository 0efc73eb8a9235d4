use anyhow::Result;
use twodo_core::clock::Clock;
use twodo_core::filter::TaskFilter;
use twodo_core::repository::TaskRepository;

use crate::cli::ListCommand;
use crate::views::line::{render_task, TimeDisplay};
use crate::views::table::display_tasks;

pub async fn list_tasks(
    repo: &impl TaskRepository,
    command: ListCommand,
    clock: &impl Clock,
    display: &TimeDisplay,
) -> Result<()> {
    let filter = build_filter(&command);
    let tasks = filter.apply(repo.find_tasks(command.all).await?);
    let now = clock.now();

    if command.table {
        display_tasks(&tasks, now, display);
    } else {
        for task in &tasks {
            println!("{}", render_task(task, now, display));
        }
    }

    Ok(())
}

fn build_filter(command: &ListCommand) -> TaskFilter {
    let filter = command
        .theme
        .iter()
        .fold(TaskFilter::new(), |filter, list| filter.with_themes(list));

    match command.limit {
        Some(limit) => filter.with_limit(limit),
        None => filter,
    }
}
