use async_trait::async_trait;

use crate::user::application::domain::entities::{User, UserCredentials, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;

    async fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, UserQueryError>;

    async fn find_credentials_by_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<UserCredentials>, UserQueryError>;

    async fn list_active_users(&self) -> Result<Vec<User>, UserQueryError>;
}
