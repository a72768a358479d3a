use async_trait::async_trait;
use tracing::info;

use crate::user::application::{
    domain::entities::UserId,
    ports::{
        incoming::use_cases::{DeleteUserError, DeleteUserUseCase},
        outgoing::{UserRepository, UserRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct DeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteUserUseCase for DeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: UserId) -> Result<(), DeleteUserError> {
        self.repository
            .delete_user(user_id)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => DeleteUserError::UserNotFound,
                other => DeleteUserError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user_id, "User deleted with everything it owns");
        Ok(())
    }
}
