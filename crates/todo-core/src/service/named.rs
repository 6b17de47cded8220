use crate::dto::{TaskCategoryDto, TaskPriorityDto, TaskStatusDto, ToDoListDto};
use crate::error::CoreError;
use crate::repository::{
    CategoryRepository, NamedRepository, PriorityRepository, StatusRepository, Table,
};
use crate::service::{BaseService, CrudService, UniqueName};
use async_trait::async_trait;
use std::sync::Arc;

impl UniqueName for TaskCategoryDto {
    fn unique_name(&self) -> &str {
        &self.name
    }
}

impl UniqueName for TaskPriorityDto {
    fn unique_name(&self) -> &str {
        &self.name
    }
}

impl UniqueName for TaskStatusDto {
    fn unique_name(&self) -> &str {
        &self.name
    }
}

impl UniqueName for ToDoListDto {
    fn unique_name(&self) -> &str {
        &self.name
    }
}

/// CRUD service for a lookup entity whose name is unique.
pub struct NamedService<R, D> {
    base: BaseService<R, D>,
}

pub type CategoryService<R = CategoryRepository> = NamedService<R, TaskCategoryDto>;
pub type PriorityService<R = PriorityRepository> = NamedService<R, TaskPriorityDto>;
pub type StatusService<R = StatusRepository> = NamedService<R, TaskStatusDto>;

impl<R, D> NamedService<R, D>
where
    R: NamedRepository,
    R::Entity: Table + From<D>,
    D: From<R::Entity> + UniqueName + Send + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            base: BaseService::new(repository),
        }
    }

    /// Looks up a row by name, case-insensitively.
    pub async fn get_by_name(&self, name: &str) -> Result<D, CoreError> {
        self.base
            .repository()
            .get_by_name(name)
            .await?
            .map(D::from)
            .ok_or_else(|| CoreError::NotFound(format!("{} '{}' does not exist", R::Entity::KIND, name)))
    }

    pub(crate) fn base(&self) -> &BaseService<R, D> {
        &self.base
    }
}

#[async_trait]
impl<R, D> CrudService for NamedService<R, D>
where
    R: NamedRepository,
    R::Entity: Table + From<D>,
    D: From<R::Entity> + UniqueName + Send + 'static,
{
    type Dto = D;

    async fn add(&self, dto: Option<D>) -> Result<i64, CoreError> {
        self.base.add_unique(dto).await
    }

    async fn update(&self, id: i64, dto: Option<D>) -> Result<i64, CoreError> {
        self.base.update_unique(id, dto).await
    }

    async fn delete(&self, id: i64) -> Result<i64, CoreError> {
        self.base.delete(id).await
    }

    async fn get_by_id(&self, id: i64) -> Result<D, CoreError> {
        self.base.get_by_id(id).await
    }

    async fn get_all(&self) -> Result<Vec<D>, CoreError> {
        self.base.get_all().await
    }
}
