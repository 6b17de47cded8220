use crate::error::CoreError;
use crate::models::TaskCategory;
use crate::repository::{
    delete_by_id, fetch_all, fetch_by_id, fetch_by_name, fetch_tasks_where, NamedRepository,
    Repository, SqliteRepository, Table,
};
use async_trait::async_trait;

impl Table for TaskCategory {
    const TABLE: &'static str = "task_categories";
    const KIND: &'static str = "Task category";

    fn id(&self) -> i64 {
        self.id
    }
}

#[async_trait]
impl Repository for SqliteRepository<TaskCategory> {
    type Entity = TaskCategory;

    async fn add(&self, item: TaskCategory) -> Result<i64, CoreError> {
        let id: i64 = sqlx::query_scalar(
            "INSERT INTO task_categories (name, description) VALUES ($1, $2) RETURNING id",
        )
        .bind(item.name)
        .bind(item.description)
        .fetch_one(self.pool())
        .await?;

        tracing::debug!(id, "task category added");
        Ok(id)
    }

    async fn delete(&self, id: i64) -> Result<i64, CoreError> {
        delete_by_id::<TaskCategory>(self.pool(), id).await
    }

    async fn update(&self, id: i64, item: TaskCategory) -> Result<i64, CoreError> {
        let result =
            sqlx::query("UPDATE task_categories SET name = $1, description = $2 WHERE id = $3")
                .bind(item.name)
                .bind(item.description)
                .bind(id)
                .execute(self.pool())
                .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::not_found(TaskCategory::KIND, id));
        }
        Ok(id)
    }

    async fn get_all(&self) -> Result<Vec<TaskCategory>, CoreError> {
        fetch_all(self.pool()).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<TaskCategory>, CoreError> {
        let Some(mut category) = fetch_by_id::<TaskCategory>(self.pool(), id).await? else {
            return Ok(None);
        };
        category.tasks = fetch_tasks_where(self.pool(), "category_id", id).await?;
        Ok(Some(category))
    }
}

#[async_trait]
impl NamedRepository for SqliteRepository<TaskCategory> {
    async fn get_by_name(&self, name: &str) -> Result<Option<TaskCategory>, CoreError> {
        fetch_by_name(self.pool(), "name", name).await
    }

    async fn check_if_exist_with_same_name(
        &self,
        name: &str,
    ) -> Result<Option<TaskCategory>, CoreError> {
        fetch_by_name(self.pool(), "name", name).await
    }
}
