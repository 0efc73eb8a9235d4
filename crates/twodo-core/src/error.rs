use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Task not found: {0}")]
    NotFound(String),

    #[error("Time has invalid format: '{0}'")]
    InvalidFormat(String),

    #[error("Invalid repeat parameter: {0}")]
    InvalidRepeatParameter(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
