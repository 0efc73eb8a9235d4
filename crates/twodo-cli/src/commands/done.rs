use anyhow::{anyhow, Result};
use owo_colors::{OwoColorize, Style};
use tracing::debug;
use twodo_core::error::CoreError;
use twodo_core::repository::TaskRepository;

use crate::cli::DoneCommand;

/// Marks every id as done. Unknown ids are reported and skipped; the command
/// fails at the end if any id was unknown.
pub async fn done_tasks(repo: &impl TaskRepository, command: DoneCommand) -> Result<()> {
    let error_style = Style::new().red().bold();
    let mut missing = 0;

    for id in &command.ids {
        match repo.complete_task(*id).await {
            Ok(task) => println!("Marked task {:04} as done: '{}'", task.id, task.description),
            Err(CoreError::NotFound(_)) => {
                debug!(id, "task to mark as done not found");
                eprintln!("{} No task with id {}", "Error:".style(error_style), id);
                missing += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    if missing > 0 {
        return Err(anyhow!(
            "{} of {} task(s) could not be marked as done",
            missing,
            command.ids.len()
        ));
    }
    Ok(())
}
