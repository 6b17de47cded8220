use crate::dto::TaskNoteDto;
use crate::error::CoreError;
use crate::repository::{NoteRepository, NotesRepository};
use crate::service::{BaseService, CrudService};
use async_trait::async_trait;
use std::sync::Arc;

pub struct NoteService<R = NotesRepository> {
    base: BaseService<R, TaskNoteDto>,
}

impl<R: NoteRepository> NoteService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            base: BaseService::new(repository),
        }
    }

    pub async fn get_all_for_task(&self, task_id: i64) -> Result<Vec<TaskNoteDto>, CoreError> {
        let notes = self.base.repository().get_all_for_task(task_id).await?;
        Ok(notes.into_iter().map(TaskNoteDto::from).collect())
    }
}

#[async_trait]
impl<R: NoteRepository> CrudService for NoteService<R> {
    type Dto = TaskNoteDto;

    async fn add(&self, dto: Option<TaskNoteDto>) -> Result<i64, CoreError> {
        self.base.add(dto).await
    }

    async fn update(&self, id: i64, dto: Option<TaskNoteDto>) -> Result<i64, CoreError> {
        self.base.update(id, dto).await
    }

    async fn delete(&self, id: i64) -> Result<i64, CoreError> {
        self.base.delete(id).await
    }

    async fn get_by_id(&self, id: i64) -> Result<TaskNoteDto, CoreError> {
        self.base.get_by_id(id).await
    }

    async fn get_all(&self) -> Result<Vec<TaskNoteDto>, CoreError> {
        self.base.get_all().await
    }
}
