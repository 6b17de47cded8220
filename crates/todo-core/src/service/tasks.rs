use crate::clock::{day_of_year, Clock};
use crate::dto::ToDoTaskDto;
use crate::error::CoreError;
use crate::models::ToDoTask;
use crate::repository::{Repository, TaskRepository, ToDoTaskRepository};
use crate::service::{BaseService, CrudService};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use std::sync::Arc;

pub struct TaskService<R = ToDoTaskRepository> {
    base: BaseService<R, ToDoTaskDto>,
    clock: Arc<dyn Clock>,
    timezone: Tz,
}

impl<R: TaskRepository> TaskService<R> {
    /// `timezone` decides which calendar day counts as "today".
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>, timezone: Tz) -> Self {
        Self {
            base: BaseService::new(repository),
            clock,
            timezone,
        }
    }

    pub async fn turn_on_off_reminder(&self, id: i64, turn_on: bool) -> Result<i64, CoreError> {
        let mut task = self.base.existing(id).await?;
        task.reminder = turn_on;
        self.base.repository().update(id, task).await
    }

    pub async fn set_reminder_time(
        &self,
        id: i64,
        reminder_date: DateTime<Utc>,
    ) -> Result<i64, CoreError> {
        let mut task = self.base.existing(id).await?;

        if reminder_date <= task.creation_date {
            tracing::warn!(id, %reminder_date, "reminder date precedes task creation");
            return Err(CoreError::InvalidArgument(
                "Reminder date must be later than the task creation date".to_string(),
            ));
        }

        task.reminder_date = reminder_date;
        self.base.repository().update(id, task).await
    }

    pub async fn check_if_reminder_time_occurs(&self, id: i64) -> Result<bool, CoreError> {
        let task = self.base.existing(id).await?;
        Ok(self.reminder_occurs(&task))
    }

    /// Reminder armed and its timestamp reached.
    pub fn reminder_occurs(&self, task: &ToDoTask) -> bool {
        task.reminder && self.clock.now() >= task.reminder_date
    }

    /// Due on the current calendar day, compared by (year, day-of-year).
    pub fn is_due_today(&self, task: &ToDoTask) -> bool {
        day_of_year(task.due_date, self.timezone) == day_of_year(self.clock.now(), self.timezone)
    }

    pub async fn get_daily_tasks(&self) -> Result<Vec<ToDoTaskDto>, CoreError> {
        self.filtered(|task| task.daily).await
    }

    pub async fn get_important_tasks(&self) -> Result<Vec<ToDoTaskDto>, CoreError> {
        self.filtered(|task| task.important).await
    }

    pub async fn get_completed_tasks(&self) -> Result<Vec<ToDoTaskDto>, CoreError> {
        self.filtered(|task| task.is_completed).await
    }

    pub async fn get_uncompleted_tasks(&self) -> Result<Vec<ToDoTaskDto>, CoreError> {
        self.filtered(|task| !task.is_completed).await
    }

    pub async fn get_tasks_for_today(&self) -> Result<Vec<ToDoTaskDto>, CoreError> {
        self.filtered(|task| self.is_due_today(task)).await
    }

    pub async fn get_all_for_list(&self, list_id: i64) -> Result<Vec<ToDoTaskDto>, CoreError> {
        let tasks = self.base.repository().get_all_for_list(list_id).await?;
        Ok(tasks.into_iter().map(ToDoTaskDto::from).collect())
    }

    async fn filtered<F>(&self, keep: F) -> Result<Vec<ToDoTaskDto>, CoreError>
    where
        F: Fn(&ToDoTask) -> bool + Send,
    {
        let tasks = self.base.repository().get_all().await?;
        Ok(tasks
            .into_iter()
            .filter(|task| keep(task))
            .map(ToDoTaskDto::from)
            .collect())
    }
}

#[async_trait]
impl<R: TaskRepository> CrudService for TaskService<R> {
    type Dto = ToDoTaskDto;

    async fn add(&self, dto: Option<ToDoTaskDto>) -> Result<i64, CoreError> {
        self.base.add(dto).await
    }

    async fn update(&self, id: i64, dto: Option<ToDoTaskDto>) -> Result<i64, CoreError> {
        self.base.update(id, dto).await
    }

    async fn delete(&self, id: i64) -> Result<i64, CoreError> {
        self.base.delete(id).await
    }

    async fn get_by_id(&self, id: i64) -> Result<ToDoTaskDto, CoreError> {
        self.base.get_by_id(id).await
    }

    async fn get_all(&self) -> Result<Vec<ToDoTaskDto>, CoreError> {
        self.base.get_all().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use chrono::{Duration, TimeZone};
    use std::sync::Mutex;

    /// In-memory stand-in so the date rules can be checked without a database.
    #[derive(Default)]
    struct MemoryTasks {
        rows: Mutex<Vec<ToDoTask>>,
    }

    #[async_trait]
    impl Repository for MemoryTasks {
        type Entity = ToDoTask;

        async fn add(&self, mut item: ToDoTask) -> Result<i64, CoreError> {
            let mut rows = self.rows.lock().unwrap();
            item.id = rows.len() as i64 + 1;
            rows.push(item);
            Ok(rows.len() as i64)
        }

        async fn delete(&self, id: i64) -> Result<i64, CoreError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|t| t.id != id);
            if rows.len() == before {
                return Err(CoreError::not_found("Task", id));
            }
            Ok(id)
        }

        async fn update(&self, id: i64, item: ToDoTask) -> Result<i64, CoreError> {
            let mut rows = self.rows.lock().unwrap();
            let row = rows
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or_else(|| CoreError::not_found("Task", id))?;
            row.reminder = item.reminder;
            row.reminder_date = item.reminder_date;
            Ok(id)
        }

        async fn get_all(&self) -> Result<Vec<ToDoTask>, CoreError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn get_by_id(&self, id: i64) -> Result<Option<ToDoTask>, CoreError> {
            Ok(self.rows.lock().unwrap().iter().find(|t| t.id == id).cloned())
        }
    }

    #[async_trait]
    impl TaskRepository for MemoryTasks {
        async fn get_all_for_list(&self, list_id: i64) -> Result<Vec<ToDoTask>, CoreError> {
            Ok(self
                .rows
                .lock()
                .unwrap()
                .iter()
                .filter(|t| t.list_id == list_id)
                .cloned()
                .collect())
        }
    }

    fn service_at(now: DateTime<Utc>) -> (TaskService<MemoryTasks>, Arc<MemoryTasks>) {
        let repo = Arc::new(MemoryTasks::default());
        let service = TaskService::new(repo.clone(), Arc::new(FixedClock(now)), chrono_tz::UTC);
        (service, repo)
    }

    fn task_due(due: DateTime<Utc>) -> ToDoTask {
        ToDoTask {
            title: "Water plants".to_string(),
            description: "Balcony".to_string(),
            creation_date: due - Duration::days(10),
            due_date: due,
            reminder_date: due - Duration::hours(1),
            list_id: 1,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_due_today_matches_calendar_day() {
        let due = Utc.with_ymd_and_hms(2024, 3, 15, 8, 0, 0).unwrap();

        let (service, repo) = service_at(Utc.with_ymd_and_hms(2024, 3, 15, 23, 59, 0).unwrap());
        repo.add(task_due(due)).await.unwrap();
        assert_eq!(service.get_tasks_for_today().await.unwrap().len(), 1);

        let (service, repo) = service_at(Utc.with_ymd_and_hms(2024, 3, 16, 0, 0, 1).unwrap());
        repo.add(task_due(due)).await.unwrap();
        assert!(service.get_tasks_for_today().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_due_today_ignores_other_years() {
        let (service, repo) = service_at(Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap());
        repo.add(task_due(Utc.with_ymd_and_hms(2023, 3, 15, 12, 0, 0).unwrap()))
            .await
            .unwrap();

        assert!(service.get_tasks_for_today().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reminder_occurrence() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let (service, repo) = service_at(now);

        let mut task = task_due(now + Duration::days(1));
        task.reminder = true;
        task.reminder_date = now;
        let id = repo.add(task).await.unwrap();
        assert!(service.check_if_reminder_time_occurs(id).await.unwrap());

        service.turn_on_off_reminder(id, false).await.unwrap();
        assert!(!service.check_if_reminder_time_occurs(id).await.unwrap());

        service.turn_on_off_reminder(id, true).await.unwrap();
        service
            .set_reminder_time(id, now + Duration::minutes(1))
            .await
            .unwrap();
        assert!(!service.check_if_reminder_time_occurs(id).await.unwrap());
    }

    #[tokio::test]
    async fn test_missing_task_is_not_found() {
        let (service, _repo) = service_at(Utc::now());

        assert!(matches!(
            service.check_if_reminder_time_occurs(99).await,
            Err(CoreError::NotFound(_))
        ));
        assert!(matches!(
            service.turn_on_off_reminder(99, true).await,
            Err(CoreError::NotFound(_))
        ));
    }
}
