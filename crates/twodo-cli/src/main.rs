use clap::Parser;
use owo_colors::{OwoColorize, Style};
use tracing::warn;
use tracing_subscriber::EnvFilter;
use twodo_core::clock::SystemClock;
use twodo_core::db;
use twodo_core::error::CoreError;
use twodo_core::repository::SqliteRepository;

use crate::config::Config;
use crate::timezone::validate_timezone;
use crate::views::line::TimeDisplay;

mod cli;
mod commands;
mod config;
mod timezone;
mod views;

#[tokio::main]
async fn main() {
    // Users can override with RUST_LOG=debug to see everything.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    let config = Config::new().unwrap_or_else(|e| {
        warn!(error = %e, "could not load configuration, using defaults");
        Config::default()
    });

    if let Err(e) = run(cli, config).await {
        handle_error(e);
        std::process::exit(1);
    }
}

async fn run(cli: cli::Cli, config: Config) -> anyhow::Result<()> {
    let timezone = validate_timezone(&config.timezone)?;
    let display = TimeDisplay::new(timezone, config.display_format)?;

    let db_pool = db::establish_connection(&config.database_path).await?;
    let repository = SqliteRepository::new(db_pool);
    let clock = SystemClock;

    match cli.command {
        cli::Commands::Add(command) => {
            commands::add::add_task(&repository, command, &clock, &display).await
        }
        cli::Commands::List(command) => {
            commands::list::list_tasks(&repository, command, &clock, &display).await
        }
        cli::Commands::Delete(command) => {
            commands::delete::delete_tasks(&repository, command).await
        }
        cli::Commands::Done(command) => commands::done::done_tasks(&repository, command).await,
    }
}

fn handle_error(err: anyhow::Error) {
    let error_style = Style::new().red().bold();

    match err.downcast_ref::<CoreError>() {
        Some(CoreError::InvalidFormat(_)) => {
            eprintln!("{} {:#}", "Error:".style(error_style), err);
            eprintln!(
                "{}",
                "Times are the trailing digits of YYYYMMDDHHMM, e.g. 1504 or 021504.".bright_black()
            );
        }
        Some(CoreError::InvalidRepeatParameter(s)) => {
            eprintln!("{} {}", "Error:".style(error_style), s);
        }
        Some(CoreError::Database(e)) => {
            eprintln!("{} Database error: {}", "Error:".style(error_style), e);
        }
        _ => eprintln!("{} {:#}", "Error:".style(error_style), err),
    }
}
