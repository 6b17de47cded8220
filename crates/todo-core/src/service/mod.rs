//! Business-rule layer sitting on top of the repositories.
//!
//! Every service checks its input before touching the store: a missing
//! payload is `NullArgument`, an unknown id is `NotFound`, and a name that is
//! already taken by another row is `AlreadyExists`.

use crate::error::CoreError;
use crate::repository::{NamedRepository, Repository, Table};
use async_trait::async_trait;
use std::marker::PhantomData;
use std::sync::Arc;

pub mod lists;
pub mod named;
pub mod notes;
pub mod tasks;
pub mod users;

pub use lists::ListService;
pub use named::{CategoryService, NamedService, PriorityService, StatusService};
pub use notes::NoteService;
pub use tasks::TaskService;
pub use users::UserService;

#[async_trait]
pub trait CrudService: Send + Sync {
    type Dto: Send + 'static;

    async fn add(&self, dto: Option<Self::Dto>) -> Result<i64, CoreError>;
    async fn update(&self, id: i64, dto: Option<Self::Dto>) -> Result<i64, CoreError>;
    async fn delete(&self, id: i64) -> Result<i64, CoreError>;
    async fn get_by_id(&self, id: i64) -> Result<Self::Dto, CoreError>;
    async fn get_all(&self) -> Result<Vec<Self::Dto>, CoreError>;
}

/// DTOs whose name must be unique among stored rows of the same kind.
pub trait UniqueName {
    fn unique_name(&self) -> &str;
}

/// Shared plumbing for the concrete services: payload and existence checks
/// plus mapping around the repository calls.
pub struct BaseService<R, D> {
    repository: Arc<R>,
    _dto: PhantomData<fn() -> D>,
}

impl<R, D> BaseService<R, D>
where
    R: Repository,
    R::Entity: Table + From<D>,
    D: From<R::Entity> + Send + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            _dto: PhantomData,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub(crate) fn require(dto: Option<D>) -> Result<D, CoreError> {
        dto.ok_or_else(|| {
            CoreError::NullArgument(format!("{} can not be null", R::Entity::KIND))
        })
    }

    /// Loads row `id`, turning absence into `NotFound`.
    pub(crate) async fn existing(&self, id: i64) -> Result<R::Entity, CoreError> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found(R::Entity::KIND, id))
    }

    pub(crate) async fn add_internal(&self, dto: D) -> Result<i64, CoreError> {
        self.repository.add(R::Entity::from(dto)).await
    }

    pub(crate) async fn update_internal(&self, id: i64, dto: D) -> Result<i64, CoreError> {
        self.repository.update(id, R::Entity::from(dto)).await
    }

    pub(crate) async fn add(&self, dto: Option<D>) -> Result<i64, CoreError> {
        let dto = Self::require(dto)?;
        self.add_internal(dto).await
    }

    pub(crate) async fn update(&self, id: i64, dto: Option<D>) -> Result<i64, CoreError> {
        let dto = Self::require(dto)?;
        self.existing(id).await?;
        self.update_internal(id, dto).await
    }

    pub(crate) async fn delete(&self, id: i64) -> Result<i64, CoreError> {
        self.existing(id).await?;
        self.repository.delete(id).await
    }

    pub(crate) async fn get_by_id(&self, id: i64) -> Result<D, CoreError> {
        self.existing(id).await.map(D::from)
    }

    pub(crate) async fn get_all(&self) -> Result<Vec<D>, CoreError> {
        let items = self.repository.get_all().await?;
        Ok(items.into_iter().map(D::from).collect())
    }
}

impl<R, D> BaseService<R, D>
where
    R: NamedRepository,
    R::Entity: Table + From<D>,
    D: From<R::Entity> + UniqueName + Send + 'static,
{
    /// Fails with `AlreadyExists` when `name` belongs to a row other than `current_id`.
    pub(crate) async fn ensure_name_free(
        &self,
        name: &str,
        current_id: Option<i64>,
    ) -> Result<(), CoreError> {
        let clash = match current_id {
            None => self.repository.get_by_name(name).await?,
            Some(_) => self.repository.check_if_exist_with_same_name(name).await?,
        };

        match clash {
            Some(existing) if Some(existing.id()) != current_id => {
                tracing::warn!(kind = R::Entity::KIND, name, "name already taken");
                Err(CoreError::AlreadyExists(format!(
                    "{} named '{}' already exists",
                    R::Entity::KIND,
                    name
                )))
            }
            _ => Ok(()),
        }
    }

    pub(crate) async fn add_unique(&self, dto: Option<D>) -> Result<i64, CoreError> {
        let dto = Self::require(dto)?;
        self.ensure_name_free(dto.unique_name(), None).await?;
        self.add_internal(dto).await
    }

    pub(crate) async fn update_unique(&self, id: i64, dto: Option<D>) -> Result<i64, CoreError> {
        let dto = Self::require(dto)?;
        self.existing(id).await?;
        self.ensure_name_free(dto.unique_name(), Some(id)).await?;
        self.update_internal(id, dto).await
    }
}
