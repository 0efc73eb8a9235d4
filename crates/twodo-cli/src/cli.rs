use clap::{Parser, Subcommand};

/// 2do is a simple command line task manager.
///
/// Times are given as the trailing digits of YYYYMMDDHHMM; the leading
/// digits you leave out are taken from the current local time.
#[derive(Parser, Debug)]
#[command(name = "twodo", author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Add a new task
    Add(AddCommand),
    /// List tasks that are not done, earliest stop time first
    List(ListCommand),
    /// Delete one or more tasks
    Delete(DeleteCommand),
    /// Mark one or more tasks as done
    Done(DoneCommand),
}

#[derive(Parser, Debug, Clone)]
pub struct AddCommand {
    /// Start time, e.g. 1504 (today 15:04) or 021504 (the 2nd, 15:04)
    pub start: String,
    /// Stop time, same format as the start time
    pub stop: String,
    /// Description; %d is replaced by the repetition index, %D by index + 1
    pub description: String,
    /// Theme the task belongs to
    pub theme: String,
    /// Repeat the task every DAYS days, TIMES times in total
    #[clap(
        short,
        long,
        num_args = 2,
        value_names = ["DAYS", "TIMES"],
        allow_negative_numbers = true
    )]
    pub repeat: Option<Vec<i64>>,
}

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// Show at most this many tasks
    #[clap(short, long)]
    pub limit: Option<usize>,
    /// Only show these themes (comma separated, case insensitive)
    #[clap(short, long)]
    pub theme: Vec<String>,
    /// Include tasks that are already done
    #[clap(short, long)]
    pub all: bool,
    /// Render a table instead of one line per task
    #[clap(long)]
    pub table: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DeleteCommand {
    /// IDs of the tasks to delete
    #[clap(required = true)]
    pub ids: Vec<i64>,
    /// Force deletion without confirmation
    #[clap(short, long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DoneCommand {
    /// IDs of the tasks to mark as done
    #[clap(required = true)]
    pub ids: Vec<i64>,
}
