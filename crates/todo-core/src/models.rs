use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Titles reserved for the computed smart views. Stored lists carrying one of
/// these titles are left out of the per-user aggregates.
pub const SMART_LIST_NAMES: [&str; 3] = ["Important", "Daily", "Today"];

/// Identity principal owning zero or more lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ApplicationUser {
    #[serde(with = "uuid::serde::compact")]
    pub id: Uuid,
    pub user_name: String,
    #[sqlx(skip)]
    #[serde(default)]
    pub lists: Vec<ToDoList>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TaskCategory {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[sqlx(skip)]
    #[serde(default)]
    pub tasks: Vec<ToDoTask>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TaskPriority {
    pub id: i64,
    pub name: String,
    #[sqlx(skip)]
    #[serde(default)]
    pub tasks: Vec<ToDoTask>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TaskStatus {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[sqlx(skip)]
    #[serde(default)]
    pub tasks: Vec<ToDoTask>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TaskNote {
    pub id: i64,
    pub description: String,
    pub task_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ToDoList {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub is_hidden: bool,
    pub creation_date: DateTime<Utc>,
    /// Owning user. Copies of a list start out without one.
    pub user_id: Option<Uuid>,
    #[sqlx(skip)]
    #[serde(default)]
    pub tasks: Vec<ToDoTask>,
}

impl ToDoList {
    /// Whether this list carries one of the reserved smart-view titles.
    ///
    /// The match is exact and case-sensitive: a stored list titled "daily"
    /// still contributes to the per-user aggregates.
    pub fn is_smart_list(&self) -> bool {
        SMART_LIST_NAMES.contains(&self.title.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ToDoTask {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub creation_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    /// Whether the reminder is armed
    pub reminder: bool,
    pub reminder_date: DateTime<Utc>,
    pub daily: bool,
    pub important: bool,
    pub is_completed: bool,
    pub list_id: i64,
    pub status_id: Option<i64>,
    pub category_id: Option<i64>,
    pub priority_id: Option<i64>,
    #[sqlx(skip)]
    #[serde(default)]
    pub notes: Vec<TaskNote>,
}

/// Task counts displayed next to the three virtual lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmartListCounts {
    pub important: usize,
    pub daily: usize,
    pub today: usize,
}
