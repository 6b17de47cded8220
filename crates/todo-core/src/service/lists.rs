use crate::dto::{ToDoListDto, ToDoTaskDto};
use crate::error::CoreError;
use crate::models::{SmartListCounts, ToDoTask};
use crate::repository::{
    ListRepository, Repository, TaskRepository, ToDoListRepository, ToDoTaskRepository,
};
use crate::service::{CrudService, NamedService, TaskService};
use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

/// Lists with unique titles, plus the per-user smart views built from their tasks.
pub struct ListService<L = ToDoListRepository, T = ToDoTaskRepository> {
    named: NamedService<L, ToDoListDto>,
    tasks: Arc<TaskService<T>>,
}

impl<L: ListRepository, T: TaskRepository> ListService<L, T> {
    pub fn new(repository: Arc<L>, tasks: Arc<TaskService<T>>) -> Self {
        Self {
            named: NamedService::new(repository),
            tasks,
        }
    }

    pub async fn change_visibility(&self, id: i64, visible: bool) -> Result<i64, CoreError> {
        let mut list = self.named.base().existing(id).await?;
        list.is_hidden = !visible;
        self.named.base().repository().update(id, list).await
    }

    /// Duplicates list `id` and its tasks under the title `<title>_Copy`.
    pub async fn copy(&self, id: i64) -> Result<i64, CoreError> {
        let source = self.named.base().existing(id).await?;
        self.named
            .base()
            .ensure_name_free(&format!("{}_Copy", source.title), None)
            .await?;
        self.named.base().repository().copy_list(id).await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<ToDoListDto, CoreError> {
        self.named.get_by_name(name).await
    }

    pub async fn get_all_for_user(&self, user_id: Uuid) -> Result<Vec<ToDoListDto>, CoreError> {
        let lists = self.named.base().repository().get_all_for_user(user_id).await?;
        Ok(lists.into_iter().map(ToDoListDto::from).collect())
    }

    pub async fn get_all_user_important_tasks(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<ToDoTaskDto>, CoreError> {
        self.user_tasks_where(user_id, |task| task.important).await
    }

    pub async fn get_all_user_daily_tasks(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<ToDoTaskDto>, CoreError> {
        self.user_tasks_where(user_id, |task| task.daily).await
    }

    pub async fn get_all_user_todays_tasks(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<ToDoTaskDto>, CoreError> {
        self.user_tasks_where(user_id, |task| self.tasks.is_due_today(task))
            .await
    }

    pub async fn get_all_user_reminder_tasks(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<ToDoTaskDto>, CoreError> {
        self.user_tasks_where(user_id, |task| self.tasks.reminder_occurs(task))
            .await
    }

    /// Task counts shown next to the Important, Daily and Today views.
    pub async fn smart_list_counts(&self, user_id: Uuid) -> Result<SmartListCounts, CoreError> {
        let tasks = self.user_tasks(user_id).await?;
        Ok(SmartListCounts {
            important: tasks.iter().filter(|t| t.important).count(),
            daily: tasks.iter().filter(|t| t.daily).count(),
            today: tasks.iter().filter(|t| self.tasks.is_due_today(t)).count(),
        })
    }

    /// Every task in the user's ordinary lists; smart-titled lists are skipped.
    async fn user_tasks(&self, user_id: Uuid) -> Result<Vec<ToDoTask>, CoreError> {
        let lists = self.named.base().repository().get_all_for_user(user_id).await?;
        Ok(lists
            .into_iter()
            .filter(|list| !list.is_smart_list())
            .flat_map(|list| list.tasks)
            .collect())
    }

    async fn user_tasks_where<F>(
        &self,
        user_id: Uuid,
        keep: F,
    ) -> Result<Vec<ToDoTaskDto>, CoreError>
    where
        F: Fn(&ToDoTask) -> bool,
    {
        let tasks = self.user_tasks(user_id).await?;
        Ok(tasks
            .into_iter()
            .filter(|task| keep(task))
            .map(ToDoTaskDto::from)
            .collect())
    }
}

#[async_trait]
impl<L: ListRepository, T: TaskRepository> CrudService for ListService<L, T> {
    type Dto = ToDoListDto;

    async fn add(&self, dto: Option<ToDoListDto>) -> Result<i64, CoreError> {
        self.named.add(dto).await
    }

    async fn update(&self, id: i64, dto: Option<ToDoListDto>) -> Result<i64, CoreError> {
        self.named.update(id, dto).await
    }

    async fn delete(&self, id: i64) -> Result<i64, CoreError> {
        self.named.delete(id).await
    }

    async fn get_by_id(&self, id: i64) -> Result<ToDoListDto, CoreError> {
        self.named.get_by_id(id).await
    }

    async fn get_all(&self) -> Result<Vec<ToDoListDto>, CoreError> {
        self.named.get_all().await
    }
}
