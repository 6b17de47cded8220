use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::time::Duration;
use crate::error::CoreError;

// Re-export the pool for use in other parts of the core crate
pub use sqlx::SqlitePool as DbPool;

const DEFAULT_CATEGORIES: [(i64, &str, &str); 3] = [
    (1, "Blue", "Blue category"),
    (2, "Green", "Green category"),
    (3, "Red", "Red category"),
];

const DEFAULT_PRIORITIES: [(i64, &str); 3] = [(1, "Low"), (2, "Medium"), (3, "High")];

const DEFAULT_STATUSES: [(i64, &str, &str); 3] = [
    (1, "Not Started", "Task not started yet."),
    (2, "In progress", "Task already started but not completed."),
    (3, "Completed", "Task completed."),
];

/// Establishes a connection pool to the SQLite database and runs migrations.
///
/// # Arguments
///
/// * `db_path` - The path to the SQLite database file.
///
/// # Returns
///
/// A `Result` containing the `SqlitePool` or a `CoreError` if the connection fails
/// or migrations cannot be run.
pub async fn establish_connection(db_path: &str) -> Result<SqlitePool, CoreError> {
    // Create the parent directory if it doesn't exist
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::debug!(db_path, "database ready");

    Ok(pool)
}

/// Inserts the default categories, priorities and statuses.
///
/// Rows are keyed by fixed ids, so running this against an already seeded
/// database leaves it untouched.
pub async fn seed_defaults(pool: &DbPool) -> Result<(), CoreError> {
    let mut tx = pool.begin().await?;

    for (id, name, description) in DEFAULT_CATEGORIES {
        sqlx::query("INSERT OR IGNORE INTO task_categories (id, name, description) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(name)
            .bind(description)
            .execute(&mut *tx)
            .await?;
    }

    for (id, name) in DEFAULT_PRIORITIES {
        sqlx::query("INSERT OR IGNORE INTO task_priorities (id, name) VALUES ($1, $2)")
            .bind(id)
            .bind(name)
            .execute(&mut *tx)
            .await?;
    }

    for (id, name, description) in DEFAULT_STATUSES {
        sqlx::query("INSERT OR IGNORE INTO task_statuses (id, name, description) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(name)
            .bind(description)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    tracing::info!("default categories, priorities and statuses seeded");
    Ok(())
}
