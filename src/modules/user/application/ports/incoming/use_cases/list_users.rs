use async_trait::async_trait;

use crate::user::application::domain::entities::User;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListUsersError {
    #[error("Failed to fetch users: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListUsersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<User>, ListUsersError>;
}
