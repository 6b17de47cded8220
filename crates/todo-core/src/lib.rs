//! # Todo Core Library
//!
//! The domain core of a multi-tenant to-do application: users own lists, lists
//! own tasks, and tasks carry notes plus optional category, priority and
//! status lookups.
//!
//! ## Layers
//!
//! - [`models`]: persisted entities
//! - [`dto`]: transfer shapes exchanged with callers
//! - [`mapping`]: `From` conversions between the two
//! - [`repository`]: SQLite data access, one repository per entity
//! - [`service`]: business rules (null payloads, existence, unique names,
//!   reminders, smart views, list copying)
//! - [`validation`]: field rules checked before a DTO reaches a service
//! - [`clock`]: injectable "now" and the calendar zone used for "today"
//! - [`db`]: pool setup, embedded migrations and default lookup rows
//! - [`error`]: the shared [`error::CoreError`]
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use todo_core::{
//!     db, dto::TaskCategoryDto,
//!     repository::SqliteRepository,
//!     service::{CategoryService, CrudService},
//! };
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let pool = db::establish_connection("todo.db").await?;
//!     let categories: CategoryService = CategoryService::new(Arc::new(SqliteRepository::new(pool)));
//!
//!     let id = categories
//!         .add(Some(TaskCategoryDto {
//!             name: "Blue".to_string(),
//!             description: "Blue category".to_string(),
//!             ..Default::default()
//!         }))
//!         .await?;
//!     println!("Created category {}", id);
//!
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod db;
pub mod dto;
pub mod error;
pub mod mapping;
pub mod models;
pub mod repository;
pub mod service;
pub mod validation;
