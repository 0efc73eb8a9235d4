use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{NewTask, Task};
use async_trait::async_trait;
use sqlx::{Sqlite, Transaction};
use tracing::{debug, info};

/// Data access for task records.
#[async_trait]
pub trait TaskRepository {
    /// Inserts all tasks in one transaction. Either every task is stored or,
    /// on the first failure, none is.
    async fn add_tasks(&self, tasks: Vec<NewTask>) -> Result<Vec<Task>, CoreError>;
    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError>;
    /// Tasks ordered by stop time, earliest first. Done tasks only when
    /// `include_done` is set.
    async fn find_tasks(&self, include_done: bool) -> Result<Vec<Task>, CoreError>;
    async fn complete_task(&self, id: i64) -> Result<Task, CoreError>;
    async fn delete_task(&self, id: i64) -> Result<(), CoreError>;
}

/// SQLite implementation of the repository pattern
pub struct SqliteRepository {
    pool: DbPool,
}

impl SqliteRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    async fn add_task_in_transaction<'a>(
        tx: &mut Transaction<'a, Sqlite>,
        data: NewTask,
    ) -> Result<Task, CoreError> {
        let id = sqlx::query(
            r#"INSERT INTO tasks (start_time, stop_time, description, theme, is_done)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(data.start_time)
        .bind(data.stop_time)
        .bind(&data.description)
        .bind(&data.theme)
        .bind(false)
        .execute(&mut **tx)
        .await?
        .last_insert_rowid();

        Ok(Task {
            id,
            start_time: data.start_time,
            stop_time: data.stop_time,
            description: data.description,
            theme: data.theme,
            is_done: false,
        })
    }
}

#[async_trait]
impl TaskRepository for SqliteRepository {
    async fn add_tasks(&self, tasks: Vec<NewTask>) -> Result<Vec<Task>, CoreError> {
        let mut tx = self.pool.begin().await?;
        let mut added = Vec::with_capacity(tasks.len());

        for data in tasks {
            added.push(Self::add_task_in_transaction(&mut tx, data).await?);
        }

        tx.commit().await?;
        info!(count = added.len(), "stored tasks");
        Ok(added)
    }

    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, CoreError> {
        let task = sqlx::query_as("SELECT * FROM tasks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(task)
    }

    async fn find_tasks(&self, include_done: bool) -> Result<Vec<Task>, CoreError> {
        let sql = if include_done {
            "SELECT * FROM tasks ORDER BY stop_time ASC, id ASC"
        } else {
            "SELECT * FROM tasks WHERE is_done = FALSE ORDER BY stop_time ASC, id ASC"
        };
        let tasks = sqlx::query_as(sql).fetch_all(&self.pool).await?;
        Ok(tasks)
    }

    async fn complete_task(&self, id: i64) -> Result<Task, CoreError> {
        let task: Option<Task> =
            sqlx::query_as("UPDATE tasks SET is_done = TRUE WHERE id = $1 RETURNING *")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        debug!(id, found = task.is_some(), "marked task as done");
        task.ok_or_else(|| CoreError::NotFound(id.to_string()))
    }

    async fn delete_task(&self, id: i64) -> Result<(), CoreError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::NotFound(id.to_string()));
        }
        debug!(id, "deleted task");
        Ok(())
    }
}
