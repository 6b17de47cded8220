use crate::error::CoreError;
use crate::models::ToDoTask;
use crate::repository::{
    delete_by_id, fetch_all, fetch_by_id, fetch_tasks_where, Repository, SqliteRepository, Table,
    TaskRepository,
};
use async_trait::async_trait;
use sqlx::{Executor, Sqlite};

impl Table for ToDoTask {
    const TABLE: &'static str = "tasks";
    const KIND: &'static str = "Task";

    fn id(&self) -> i64 {
        self.id
    }
}

impl SqliteRepository<ToDoTask> {
    /// Inserts a task row; usable with the pool or inside an open transaction.
    pub(crate) async fn insert_task<'e, E>(executor: E, task: &ToDoTask) -> Result<i64, CoreError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let id: i64 = sqlx::query_scalar(
            r#"INSERT INTO tasks (
                title, description, creation_date, due_date, reminder, reminder_date,
                daily, important, is_completed, list_id, status_id, category_id, priority_id
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id
            "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.creation_date)
        .bind(task.due_date)
        .bind(task.reminder)
        .bind(task.reminder_date)
        .bind(task.daily)
        .bind(task.important)
        .bind(task.is_completed)
        .bind(task.list_id)
        .bind(task.status_id)
        .bind(task.category_id)
        .bind(task.priority_id)
        .fetch_one(executor)
        .await?;
        Ok(id)
    }
}

#[async_trait]
impl Repository for SqliteRepository<ToDoTask> {
    type Entity = ToDoTask;

    async fn add(&self, item: ToDoTask) -> Result<i64, CoreError> {
        let id = Self::insert_task(self.pool(), &item).await?;
        tracing::debug!(id, list_id = item.list_id, "task added");
        Ok(id)
    }

    async fn delete(&self, id: i64) -> Result<i64, CoreError> {
        delete_by_id::<ToDoTask>(self.pool(), id).await
    }

    async fn update(&self, id: i64, item: ToDoTask) -> Result<i64, CoreError> {
        let result = sqlx::query(
            r#"UPDATE tasks
            SET title = $1, description = $2, due_date = $3, reminder = $4,
                reminder_date = $5, daily = $6, important = $7, is_completed = $8
            WHERE id = $9
            "#,
        )
        .bind(item.title)
        .bind(item.description)
        .bind(item.due_date)
        .bind(item.reminder)
        .bind(item.reminder_date)
        .bind(item.daily)
        .bind(item.important)
        .bind(item.is_completed)
        .bind(id)
        .execute(self.pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::not_found(ToDoTask::KIND, id));
        }
        tracing::debug!(id, "task updated");
        Ok(id)
    }

    async fn get_all(&self) -> Result<Vec<ToDoTask>, CoreError> {
        fetch_all(self.pool()).await
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<ToDoTask>, CoreError> {
        let Some(mut task) = fetch_by_id::<ToDoTask>(self.pool(), id).await? else {
            return Ok(None);
        };
        task.notes = sqlx::query_as("SELECT * FROM task_notes WHERE task_id = $1 ORDER BY id")
            .bind(id)
            .fetch_all(self.pool())
            .await?;
        Ok(Some(task))
    }
}

#[async_trait]
impl TaskRepository for SqliteRepository<ToDoTask> {
    async fn get_all_for_list(&self, list_id: i64) -> Result<Vec<ToDoTask>, CoreError> {
        fetch_tasks_where(self.pool(), "list_id", list_id).await
    }
}
