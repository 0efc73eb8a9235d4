use crate::error::CoreError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use tracing::debug;

// Re-export the pool for use in other parts of the core crate
pub use sqlx::SqlitePool as DbPool;

const CREATE_TASKS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS tasks (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        start_time TIMESTAMP NOT NULL,
        stop_time TIMESTAMP NOT NULL,
        description TEXT NOT NULL,
        theme TEXT NOT NULL,
        is_done BOOLEAN NOT NULL DEFAULT FALSE
    )
"#;

/// Opens a connection pool to the SQLite database and makes sure the `tasks`
/// table exists.
///
/// # Arguments
///
/// * `db_path` - The path to the SQLite database file.
///
/// # Returns
///
/// A `Result` containing the `SqlitePool` or a `CoreError` if the connection
/// fails or the table cannot be created.
pub async fn establish_connection(db_path: &str) -> Result<SqlitePool, CoreError> {
    // Create the directory if it doesn't exist; sqlite creates the file
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    sqlx::query(CREATE_TASKS_TABLE).execute(&pool).await?;
    debug!(db_path, "database ready");

    Ok(pool)
}
