use crate::error::CoreError;
use crate::models::{ApplicationUser, ToDoList};
use crate::repository::{same_name, SqliteRepository, UserRepository};
use async_trait::async_trait;
use uuid::Uuid;

impl SqliteRepository<ApplicationUser> {
    async fn with_lists(&self, mut user: ApplicationUser) -> Result<ApplicationUser, CoreError> {
        let lists: Vec<ToDoList> =
            sqlx::query_as("SELECT * FROM lists WHERE user_id = $1 ORDER BY id")
                .bind(user.id)
                .fetch_all(self.pool())
                .await?;
        user.lists = lists;
        Ok(user)
    }
}

#[async_trait]
impl UserRepository for SqliteRepository<ApplicationUser> {
    async fn add_user(&self, user_name: String) -> Result<ApplicationUser, CoreError> {
        let user_id = Uuid::now_v7();
        let user = sqlx::query_as(
            r#"INSERT INTO users (id, user_name)
            VALUES ($1, $2)
            RETURNING id, user_name
            "#,
        )
        .bind(user_id)
        .bind(user_name)
        .fetch_one(self.pool())
        .await?;

        tracing::debug!(%user_id, "user added");
        Ok(user)
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<ApplicationUser>, CoreError> {
        let user: Option<ApplicationUser> = sqlx::query_as("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(self.pool())
            .await?;

        match user {
            Some(user) => Ok(Some(self.with_lists(user).await?)),
            None => Ok(None),
        }
    }

    async fn find_user_by_name(
        &self,
        user_name: &str,
    ) -> Result<Option<ApplicationUser>, CoreError> {
        let users: Vec<ApplicationUser> = sqlx::query_as("SELECT * FROM users ORDER BY id")
            .fetch_all(self.pool())
            .await?;
        let user = users
            .into_iter()
            .find(|user| same_name(&user.user_name, user_name));

        match user {
            Some(user) => Ok(Some(self.with_lists(user).await?)),
            None => Ok(None),
        }
    }

    async fn find_users(&self) -> Result<Vec<ApplicationUser>, CoreError> {
        let users: Vec<ApplicationUser> = sqlx::query_as("SELECT * FROM users ORDER BY user_name")
            .fetch_all(self.pool())
            .await?;

        let mut result = Vec::with_capacity(users.len());
        for user in users {
            result.push(self.with_lists(user).await?);
        }
        Ok(result)
    }
}
