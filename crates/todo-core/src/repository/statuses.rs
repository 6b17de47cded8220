use crate::error::CoreError;
use crate::models::TaskStatus;
use crate::repository::{
    delete_by_id, fetch_all, fetch_by_id, fetch_by_name, fetch_tasks_where, NamedRepository,
    Repository, SqliteRepository, Table,
};
use async_trait::async_trait;

impl Table for TaskStatus {
    const TABLE: &'static str = "task_statuses";
    const KIND: &'static str = "Task status";

    fn id(&self) -> i64 {
        self.id
    }
}

#[async_trait]
impl Repository for SqliteRepository<TaskStatus> {
    type Entity = TaskStatus;

    async fn add(&self, item: TaskStatus) -> Result<i64, CoreError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO task_statuses (name, description) VALUES ($1, $2) RETURNING id",
        )
        .bind(item.name)
        .bind(item.description)
        .fetch_one(self.pool())
        .await?;

        tracing::debug!(id, "task status added");
        Ok(id)
    }

    async fn delete(&self, id: i64) -> Result<i64, CoreError> {
        delete_by_id::<TaskStatus>(self.pool(), id).await
    }

    async fn update(&self, id: i64, item: TaskStatus) -> Result<i64, CoreError> {
        let result = sqlx::query("UPDATE task_statuses SET name = $1, description = $2 WHERE id = $3")
            .bind(item.name)
            .bind(item.description)
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::not_found(TaskStatus::KIND, id));
        }
        Ok(id)
    }

    async fn get_all(&self) -> Result<Vec<TaskStatus>, CoreError> {
        fetch_all(self.pool()).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<TaskStatus>, CoreError> {
        let Some(mut status) = fetch_by_id::<TaskStatus>(self.pool(), id).await? else {
            return Ok(None);
        };
        status.tasks = fetch_tasks_where(self.pool(), "status_id", id).await?;
        Ok(Some(status))
    }
}

#[async_trait]
impl NamedRepository for SqliteRepository<TaskStatus> {
    async fn get_by_name(&self, name: &str) -> Result<Option<TaskStatus>, CoreError> {
        fetch_by_name(self.pool(), "name", name).await
    }

    async fn check_if_exist_with_same_name(
        &self,
        name: &str,
    ) -> Result<Option<TaskStatus>, CoreError> {
        fetch_by_name(self.pool(), "name", name).await
    }
}
