//! # 2do Core Library
//!
//! The pieces of the 2do task tracker that carry actual logic, plus the
//! SQLite store the command line front end writes into.
//!
//! ## Core Modules
//!
//! - [`timeparse`]: Resolves right-aligned `YYYYMMDDHHMM` fragments against "now"
//! - [`recurrence`]: Expands a task template into its concrete repetitions
//! - [`models`]: Task records, templates and repeat parameters
//! - [`filter`]: Theme/limit filtering of listed tasks
//! - [`repository`]: Data access layer with Repository pattern
//! - [`db`]: Database connection and table setup
//! - [`clock`]: Source of the current instant
//! - [`error`]: Error types shared by every module
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use twodo_core::{
//!     clock::{Clock, SystemClock},
//!     db,
//!     models::{Repeat, TaskTemplate},
//!     recurrence::RecurrenceExpander,
//!     repository::{SqliteRepository, TaskRepository},
//!     timeparse::PartialTimeParser,
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = db::establish_connection("2do.db").await?;
//!     let repo = SqliteRepository::new(pool);
//!
//!     let parser = PartialTimeParser::new(chrono_tz::Europe::Oslo);
//!     let now = SystemClock.now();
//!     let template = TaskTemplate {
//!         start: parser.parse("0900", now)?,
//!         stop: parser.parse("1000", now)?,
//!         description: "Standup %D".to_string(),
//!         theme: "work".to_string(),
//!         repeat: Repeat::new(7, 3)?,
//!     };
//!
//!     let records = RecurrenceExpander::expand(&template)?;
//!     let added = repo.add_tasks(records).await?;
//!     println!("Added {} tasks", added.len());
//!
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod db;
pub mod error;
pub mod filter;
pub mod models;
pub mod recurrence;
pub mod repository;
pub mod timeparse;
