use crate::error::CoreError;
use crate::models::TaskPriority;
use crate::repository::{
    delete_by_id, fetch_all, fetch_by_id, fetch_by_name, fetch_tasks_where, NamedRepository,
    Repository, SqliteRepository, Table,
};
use async_trait::async_trait;

impl Table for TaskPriority {
    const TABLE: &'static str = "task_priorities";
    const KIND: &'static str = "Task priority";

    fn id(&self) -> i64 {
        self.id
    }
}

#[async_trait]
impl Repository for SqliteRepository<TaskPriority> {
    type Entity = TaskPriority;

    async fn add(&self, item: TaskPriority) -> Result<i64, CoreError> {
        let id: i64 = sqlx::query_scalar("INSERT INTO task_priorities (name) VALUES ($1) RETURNING id")
            .bind(item.name)
            .fetch_one(self.pool())
            .await?;

        tracing::debug!(id, "task priority added");
        Ok(id)
    }

    async fn delete(&self, id: i64) -> Result<i64, CoreError> {
        delete_by_id::<TaskPriority>(self.pool(), id).await
    }

    async fn update(&self, id: i64, item: TaskPriority) -> Result<i64, CoreError> {
        let result = sqlx::query("UPDATE task_priorities SET name = $1 WHERE id = $2")
            .bind(item.name)
            .bind(id)
            .execute(self.pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::not_found(TaskPriority::KIND, id));
        }
        Ok(id)
    }

    async fn get_all(&self) -> Result<Vec<TaskPriority>, CoreError> {
        fetch_all(self.pool()).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<TaskPriority>, CoreError> {
        let Some(mut priority) = fetch_by_id::<TaskPriority>(self.pool(), id).await? else {
            return Ok(None);
        };
        priority.tasks = fetch_tasks_where(self.pool(), "priority_id", id).await?;
        Ok(Some(priority))
    }
}

#[async_trait]
impl NamedRepository for SqliteRepository<TaskPriority> {
    async fn get_by_name(&self, name: &str) -> Result<Option<TaskPriority>, CoreError> {
        fetch_by_name(self.pool(), "name", name).await
    }

    async fn check_if_exist_with_same_name(
        &self,
        name: &str,
    ) -> Result<Option<TaskPriority>, CoreError> {
        fetch_by_name(self.pool(), "name", name).await
    }
}
