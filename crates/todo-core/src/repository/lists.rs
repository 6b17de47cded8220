use crate::error::CoreError;
use crate::models::{ToDoList, ToDoTask};
use crate::repository::{
    delete_by_id, fetch_by_id, fetch_by_name, fetch_tasks_where, ListRepository, NamedRepository,
    Repository, SqliteRepository, Table,
};
use async_trait::async_trait;
use sqlx::{Executor, Sqlite};
use std::collections::HashMap;
use uuid::Uuid;

const COPY_SUFFIX: &str = "_Copy";

impl Table for ToDoList {
    const TABLE: &'static str = "lists";
    const KIND: &'static str = "List";

    fn id(&self) -> i64 {
        self.id
    }
}

impl SqliteRepository<ToDoList> {
    async fn insert_list<'e, E>(executor: E, list: &ToDoList) -> Result<i64, CoreError>
    where
        E: Executor<'e, Database = Sqlite>,
    {
        let id: i64 = sqlx::query_scalar(
            r#"INSERT INTO lists (title, description, is_hidden, creation_date, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&list.title)
        .bind(&list.description)
        .bind(list.is_hidden)
        .bind(list.creation_date)
        .bind(list.user_id)
        .fetch_one(executor)
        .await?;
        Ok(id)
    }

    /// Distributes `tasks` over `lists` by `list_id`.
    fn attach_tasks(lists: &mut [ToDoList], tasks: Vec<ToDoTask>) {
        let mut by_list: HashMap<i64, Vec<ToDoTask>> = HashMap::new();
        for task in tasks {
            by_list.entry(task.list_id).or_default().push(task);
        }
        for list in lists.iter_mut() {
            list.tasks = by_list.remove(&list.id).unwrap_or_default();
        }
    }
}

#[async_trait]
impl Repository for SqliteRepository<ToDoList> {
    type Entity = ToDoList;

    async fn add(&self, item: ToDoList) -> Result<i64, CoreError> {
        let id = Self::insert_list(self.pool(), &item).await?;
        tracing::debug!(id, title = %item.title, "list added");
        Ok(id)
    }

    async fn delete(&self, id: i64) -> Result<i64, CoreError> {
        delete_by_id::<ToDoList>(self.pool(), id).await
    }

    async fn update(&self, id: i64, item: ToDoList) -> Result<i64, CoreError> {
        let result =
            sqlx::query("UPDATE lists SET title = $1, description = $2, is_hidden = $3 WHERE id = $4")
                .bind(item.title)
                .bind(item.description)
                .bind(item.is_hidden)
                .bind(id)
                .execute(self.pool())
                .await?;

        if result.rows_affected() == 0 {
            return Err(CoreError::not_found(ToDoList::KIND, id));
        }
        tracing::debug!(id, "list updated");
        Ok(id)
    }

    async fn get_all(&self) -> Result<Vec<ToDoList>, CoreError> {
        let mut lists: Vec<ToDoList> = sqlx::query_as("SELECT * FROM lists ORDER BY id")
            .fetch_all(self.pool())
            .await?;
        let tasks: Vec<ToDoTask> = sqlx::query_as("SELECT * FROM tasks ORDER BY id")
            .fetch_all(self.pool())
            .await?;

        Self::attach_tasks(&mut lists, tasks);
        Ok(lists)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<ToDoList>, CoreError> {
        let Some(mut list) = fetch_by_id::<ToDoList>(self.pool(), id).await? else {
            return Ok(None);
        };
        list.tasks = fetch_tasks_where(self.pool(), "list_id", id).await?;
        Ok(Some(list))
    }
}

#[async_trait]
impl NamedRepository for SqliteRepository<ToDoList> {
    async fn get_by_name(&self, name: &str) -> Result<Option<ToDoList>, CoreError> {
        fetch_by_name(self.pool(), "title", name).await
    }

    async fn check_if_exist_with_same_name(
        &self,
        name: &str,
    ) -> Result<Option<ToDoList>, CoreError> {
        fetch_by_name(self.pool(), "title", name).await
    }
}

#[async_trait]
impl ListRepository for SqliteRepository<ToDoList> {
    async fn copy_list(&self, id: i64) -> Result<i64, CoreError> {
        let mut tx = self.pool().begin().await?;

        let source: ToDoList = sqlx::query_as("SELECT * FROM lists WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| CoreError::not_found(ToDoList::KIND, id))?;

        let tasks: Vec<ToDoTask> =
            sqlx::query_as("SELECT * FROM tasks WHERE list_id = $1 ORDER BY id")
                .bind(id)
                .fetch_all(&mut *tx)
                .await?;

        let copy = ToDoList {
            id: 0,
            title: format!("{}{}", source.title, COPY_SUFFIX),
            description: format!("{}{}", source.description, COPY_SUFFIX),
            user_id: None,
            tasks: Vec::new(),
            ..source
        };
        let new_list_id = Self::insert_list(&mut *tx, &copy).await?;

        let task_count = tasks.len();
        for task in tasks {
            let task_copy = ToDoTask {
                id: 0,
                list_id: new_list_id,
                status_id: None,
                category_id: None,
                priority_id: None,
                notes: Vec::new(),
                ..task
            };
            SqliteRepository::<ToDoTask>::insert_task(&mut *tx, &task_copy).await?;
        }

        tx.commit().await?;
        tracing::info!(source_id = id, new_list_id, task_count, "list copied");
        Ok(new_list_id)
    }

    async fn get_all_for_user(&self, user_id: Uuid) -> Result<Vec<ToDoList>, CoreError> {
        let mut lists: Vec<ToDoList> =
            sqlx::query_as("SELECT * FROM lists WHERE user_id = $1 ORDER BY id")
                .bind(user_id)
                .fetch_all(self.pool())
                .await?;
        let tasks: Vec<ToDoTask> = sqlx::query_as(
            r#"SELECT t.* FROM tasks t
            INNER JOIN lists l ON t.list_id = l.id
            WHERE l.user_id = $1
            ORDER BY t.id"#,
        )
        .bind(user_id)
        .fetch_all(self.pool())
        .await?;

        Self::attach_tasks(&mut lists, tasks);
        Ok(lists)
    }
}
