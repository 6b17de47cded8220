use crate::dto::UserDto;
use crate::error::CoreError;
use crate::repository::{ApplicationUserRepository, UserRepository};
use std::sync::Arc;
use uuid::Uuid;

pub struct UserService<R = ApplicationUserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a user. Names are unique, compared case-insensitively.
    pub async fn register(&self, user_name: &str) -> Result<UserDto, CoreError> {
        let user_name = user_name.trim();
        if user_name.is_empty() {
            return Err(CoreError::InvalidArgument(
                "User name can not be empty".to_string(),
            ));
        }

        if self.repository.find_user_by_name(user_name).await?.is_some() {
            tracing::warn!(user_name, "user name already taken");
            return Err(CoreError::AlreadyExists(format!(
                "User '{}' already exists",
                user_name
            )));
        }

        let user = self.repository.add_user(user_name.to_string()).await?;
        tracing::info!(user_id = %user.id, "user registered");
        Ok(UserDto::from(user))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<UserDto, CoreError> {
        self.repository
            .find_user_by_id(id)
            .await?
            .map(UserDto::from)
            .ok_or_else(|| CoreError::NotFound(format!("User with id {} does not exist", id)))
    }

    pub async fn get_by_name(&self, user_name: &str) -> Result<UserDto, CoreError> {
        self.repository
            .find_user_by_name(user_name)
            .await?
            .map(UserDto::from)
            .ok_or_else(|| CoreError::NotFound(format!("User '{}' does not exist", user_name)))
    }

    pub async fn get_all(&self) -> Result<Vec<UserDto>, CoreError> {
        let users = self.repository.find_users().await?;
        Ok(users.into_iter().map(UserDto::from).collect())
    }
}
