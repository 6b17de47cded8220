use crate::error::CoreError;
use crate::models::TaskNote;
use crate::repository::{
    delete_by_id, fetch_all, fetch_by_id, NoteRepository, Repository, SqliteRepository, Table,
};
use async_trait::async_trait;

impl Table for TaskNote {
    const TABLE: &'static str = "task_notes";
    const KIND: &'static str = "Task note";

    fn id(&self) -> i64 {
        self.id
    }
}

#[async_trait]
impl Repository for SqliteRepository<TaskNote> {
    type Entity = TaskNote;

    async fn add(&self, item: TaskNote) -> Result<i64, CoreError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO task_notes (description, task_id) VALUES ($1, $2) RETURNING id",
        )
        .bind(item.description)
        .bind(item.task_id)
        .fetch_one(self.pool())
        .await?;

        tracing::debug!(id, task_id = item.task_id, "task note added");
        Ok(id)
    }

    async fn delete(&self, id: i64) -> Result<i64, CoreError> {
        delete_by_id::<TaskNote>(self.pool(), id).await
    }

    async fn update(&self, id: i64, item: TaskNote) -> Result<i64, CoreError> {
        let result = sqlx::query("UPDATE task_notes SET description = $1 WHERE id = $2")
            .bind(item.description)
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::not_found(TaskNote::KIND, id));
        }
        Ok(id)
    }

    async fn get_all(&self) -> Result<Vec<TaskNote>, CoreError> {
        fetch_all(self.pool()).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<TaskNote>, CoreError> {
        fetch_by_id(self.pool(), id).await
    }
}

#[async_trait]
impl NoteRepository for SqliteRepository<TaskNote> {
    async fn get_all_for_task(&self, task_id: i64) -> Result<Vec<TaskNote>, CoreError> {
        let notes = sqlx::query_as("SELECT * FROM task_notes WHERE task_id = $1 ORDER BY id")
            .bind(task_id)
            .fetch_all(self.pool())
            .await?;
        Ok(notes)
    }
}
