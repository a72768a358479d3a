use async_trait::async_trait;

use crate::user::application::domain::entities::{User, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetUserUseCase: Send + Sync {
    async fn execute(&self, user_id: UserId) -> Result<User, GetUserError>;
}
