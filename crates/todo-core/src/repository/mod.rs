use crate::db::DbPool;
use crate::error::CoreError;
use crate::models::{
    ApplicationUser, TaskCategory, TaskNote, TaskPriority, TaskStatus, ToDoList, ToDoTask,
};
use async_trait::async_trait;
use sqlx::sqlite::SqliteRow;
use sqlx::FromRow;
use std::marker::PhantomData;
use uuid::Uuid;

// Per-entity implementations
pub mod categories;
pub mod lists;
pub mod notes;
pub mod priorities;
pub mod statuses;
pub mod tasks;
pub mod users;

/// Binds an entity type to the table it is stored in.
pub trait Table {
    const TABLE: &'static str;
    /// Human readable entity name used in error messages
    const KIND: &'static str;

    fn id(&self) -> i64;
}

/// Generic data access contract shared by every entity with an integer identity.
#[async_trait]
pub trait Repository: Send + Sync {
    type Entity: Send + 'static;

    /// Inserts the item and returns its assigned identity. No de-duplication happens here.
    async fn add(&self, item: Self::Entity) -> Result<i64, CoreError>;
    async fn delete(&self, id: i64) -> Result<i64, CoreError>;
    /// Copies the entity's mutable fields from `item` onto row `id`.
    async fn update(&self, id: i64, item: Self::Entity) -> Result<i64, CoreError>;
    async fn get_all(&self) -> Result<Vec<Self::Entity>, CoreError>;
    async fn get_by_id(&self, id: i64) -> Result<Option<Self::Entity>, CoreError>;
}

/// Entities whose name (or title) is unique, compared case-insensitively.
#[async_trait]
pub trait NamedRepository: Repository {
    async fn get_by_name(&self, name: &str) -> Result<Option<Self::Entity>, CoreError>;
    async fn check_if_exist_with_same_name(
        &self,
        name: &str,
    ) -> Result<Option<Self::Entity>, CoreError>;
}

#[async_trait]
pub trait ListRepository: NamedRepository<Entity = ToDoList> {
    /// Deep-clones a list and its tasks in one transaction, returning the new list id.
    async fn copy_list(&self, id: i64) -> Result<i64, CoreError>;
    async fn get_all_for_user(&self, user_id: Uuid) -> Result<Vec<ToDoList>, CoreError>;
}

#[async_trait]
pub trait TaskRepository: Repository<Entity = ToDoTask> {
    async fn get_all_for_list(&self, list_id: i64) -> Result<Vec<ToDoTask>, CoreError>;
}

#[async_trait]
pub trait NoteRepository: Repository<Entity = TaskNote> {
    async fn get_all_for_task(&self, task_id: i64) -> Result<Vec<TaskNote>, CoreError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn add_user(&self, user_name: String) -> Result<ApplicationUser, CoreError>;
    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<ApplicationUser>, CoreError>;
    async fn find_user_by_name(&self, user_name: &str)
        -> Result<Option<ApplicationUser>, CoreError>;
    async fn find_users(&self) -> Result<Vec<ApplicationUser>, CoreError>;
}

/// SQLite implementation of the repository pattern, one instance per entity type.
pub struct SqliteRepository<T> {
    pool: DbPool,
    _entity: PhantomData<fn() -> T>,
}

impl<T> SqliteRepository<T> {
    pub fn new(pool: DbPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    /// Get a reference to the database pool for internal use across modules
    pub(crate) fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl<T> Clone for SqliteRepository<T> {
    fn clone(&self) -> Self {
        Self::new(self.pool.clone())
    }
}

pub type CategoryRepository = SqliteRepository<TaskCategory>;
pub type PriorityRepository = SqliteRepository<TaskPriority>;
pub type StatusRepository = SqliteRepository<TaskStatus>;
pub type NotesRepository = SqliteRepository<TaskNote>;
pub type ToDoListRepository = SqliteRepository<ToDoList>;
pub type ToDoTaskRepository = SqliteRepository<ToDoTask>;
pub type ApplicationUserRepository = SqliteRepository<ApplicationUser>;

// Shared query helpers used by the per-entity modules

pub(crate) async fn fetch_by_id<T>(pool: &DbPool, id: i64) -> Result<Option<T>, CoreError>
where
    T: Table + for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let sql = format!("SELECT * FROM {} WHERE id = $1", T::TABLE);
    let item = sqlx::query_as::<_, T>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(item)
}

pub(crate) async fn fetch_all<T>(pool: &DbPool) -> Result<Vec<T>, CoreError>
where
    T: Table + for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let sql = format!("SELECT * FROM {} ORDER BY id", T::TABLE);
    let items = sqlx::query_as::<_, T>(&sql).fetch_all(pool).await?;
    Ok(items)
}

/// Name equality ignoring case, with full Unicode folding.
pub(crate) fn same_name(stored: &str, candidate: &str) -> bool {
    stored.to_lowercase() == candidate.to_lowercase()
}

/// Case-insensitive exact match on `column`.
///
/// SQLite's `LOWER()` only folds ASCII, so names are compared in Rust.
pub(crate) async fn fetch_by_name<T>(
    pool: &DbPool,
    column: &str,
    name: &str,
) -> Result<Option<T>, CoreError>
where
    T: Table + for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let sql = format!("SELECT id, {} FROM {} ORDER BY id", column, T::TABLE);
    let names: Vec<(i64, String)> = sqlx::query_as(&sql).fetch_all(pool).await?;

    match names.into_iter().find(|(_, stored)| same_name(stored, name)) {
        Some((id, _)) => fetch_by_id(pool, id).await,
        None => Ok(None),
    }
}

pub(crate) async fn delete_by_id<T: Table>(pool: &DbPool, id: i64) -> Result<i64, CoreError> {
    let sql = format!("DELETE FROM {} WHERE id = $1", T::TABLE);
    let result = sqlx::query(&sql).bind(id).execute(pool).await?;

    if result.rows_affected() == 0 {
        return Err(CoreError::not_found(T::KIND, id));
    }
    tracing::debug!(table = T::TABLE, id, "row deleted");
    Ok(id)
}

/// Tasks whose foreign key `column` points at `id`.
pub(crate) async fn fetch_tasks_where(
    pool: &DbPool,
    column: &str,
    id: i64,
) -> Result<Vec<ToDoTask>, CoreError> {
    let sql = format!("SELECT * FROM tasks WHERE {} = $1 ORDER BY id", column);
    let tasks = sqlx::query_as::<_, ToDoTask>(&sql)
        .bind(id)
        .fetch_all(pool)
        .await?;
    Ok(tasks)
}
