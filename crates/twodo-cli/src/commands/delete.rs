use anyhow::{anyhow, Result};
use dialoguer::Confirm;
use owo_colors::{OwoColorize, Style};
use tracing::debug;
use twodo_core::repository::TaskRepository;

use crate::cli::DeleteCommand;

/// Deletes every id, asking for confirmation first unless `--force` is given.
/// Unknown ids are reported and skipped; the command fails at the end if any
/// id was unknown.
pub async fn delete_tasks(repo: &impl TaskRepository, command: DeleteCommand) -> Result<()> {
    let error_style = Style::new().red().bold();
    let mut missing = 0;

    for id in &command.ids {
        let task = match repo.find_task_by_id(*id).await? {
            Some(task) => task,
            None => {
                debug!(id, "task to delete not found");
                eprintln!("{} No task with id {}", "Error:".style(error_style), id);
                missing += 1;
                continue;
            }
        };

        if !command.force {
            let confirmation = Confirm::new()
                .with_prompt(format!(
                    "Are you sure you want to delete task {:04} '{}'?",
                    task.id, task.description
                ))
                .default(false)
                .interact()
                .unwrap_or(false);

            if !confirmation {
                println!("Deletion of task {:04} cancelled.", task.id);
                continue;
            }
        }

        repo.delete_task(task.id).await?;
        println!("Deleted task {:04}: '{}'", task.id, task.description);
    }

    if missing > 0 {
        return Err(anyhow!(
            "{} of {} task(s) could not be deleted",
            missing,
            command.ids.len()
        ));
    }
    Ok(())
}
