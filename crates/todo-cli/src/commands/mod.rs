//! One submodule per top-level command. Handlers validate input, call the
//! services held by [`App`] and render the outcome.

use chrono_tz::Tz;
use std::sync::Arc;
use todo_core::clock::Clock;
use todo_core::db::DbPool;
use todo_core::repository::SqliteRepository;
use todo_core::service::{
    CategoryService, ListService, NoteService, PriorityService, StatusService, TaskService,
    UserService,
};

pub mod lists;
pub mod lookups;
pub mod notes;
pub mod tasks;
pub mod users;
pub mod views;

/// Services wired against one database.
pub struct App {
    pub users: UserService,
    pub lists: ListService,
    pub tasks: Arc<TaskService>,
    pub notes: NoteService,
    pub categories: CategoryService,
    pub priorities: PriorityService,
    pub statuses: StatusService,
    pub timezone: Tz,
    pub default_user: Option<String>,
}

impl App {
    pub fn new(
        pool: DbPool,
        clock: Arc<dyn Clock>,
        timezone: Tz,
        default_user: Option<String>,
    ) -> Self {
        let tasks: Arc<TaskService> = Arc::new(TaskService::new(
            Arc::new(SqliteRepository::new(pool.clone())),
            clock,
            timezone,
        ));

        Self {
            users: UserService::new(Arc::new(SqliteRepository::new(pool.clone()))),
            lists: ListService::new(Arc::new(SqliteRepository::new(pool.clone())), tasks.clone()),
            notes: NoteService::new(Arc::new(SqliteRepository::new(pool.clone()))),
            categories: CategoryService::new(Arc::new(SqliteRepository::new(pool.clone()))),
            priorities: PriorityService::new(Arc::new(SqliteRepository::new(pool.clone()))),
            statuses: StatusService::new(Arc::new(SqliteRepository::new(pool))),
            tasks,
            timezone,
            default_user,
        }
    }
}
