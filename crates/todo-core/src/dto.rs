//! Transfer shapes exposed across the service boundary.
//!
//! Every DTO carries an `id` and a `name`; for lists and tasks the name is the
//! title, for notes it is the note text.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskCategoryDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tasks: Vec<ToDoTaskDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskPriorityDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub tasks: Vec<ToDoTaskDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskStatusDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tasks: Vec<ToDoTaskDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskNoteDto {
    pub id: i64,
    /// Note text
    pub name: String,
    pub task_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToDoListDto {
    pub id: i64,
    /// List title
    pub name: String,
    pub description: String,
    pub is_hidden: bool,
    pub creation_date: DateTime<Utc>,
    pub user_id: Option<Uuid>,
    pub number_of_tasks: usize,
    #[serde(default)]
    pub tasks: Vec<ToDoTaskDto>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToDoTaskDto {
    pub id: i64,
    /// Task title
    pub name: String,
    pub description: String,
    pub creation_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub reminder: bool,
    pub reminder_date: DateTime<Utc>,
    pub daily: bool,
    pub important: bool,
    pub is_completed: bool,
    pub list_id: i64,
    pub status_id: Option<i64>,
    pub category_id: Option<i64>,
    pub priority_id: Option<i64>,
    pub number_of_notes: usize,
    #[serde(default)]
    pub notes: Vec<TaskNoteDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserDto {
    pub id: Uuid,
    pub name: String,
    pub number_of_lists: usize,
}
