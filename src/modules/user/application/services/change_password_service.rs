use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::shared::validation::FieldErrors;
use crate::user::application::{
    domain::entities::UserId,
    ports::{
        incoming::use_cases::{ChangePasswordCommand, ChangePasswordError, ChangePasswordUseCase},
        outgoing::{PasswordHasher, UserQuery, UserRepository, UserRepositoryError},
    },
};

#[derive(Clone)]
pub struct ChangePasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> ChangePasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, hasher: Arc<dyn PasswordHasher + Send + Sync>) -> Self {
        Self {
            query,
            repository,
            hasher,
        }
    }
}

#[async_trait]
impl<Q, R> ChangePasswordUseCase for ChangePasswordService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        command: ChangePasswordCommand,
    ) -> Result<(), ChangePasswordError> {
        let credentials = self
            .query
            .find_credentials_by_id(user_id)
            .await
            .map_err(|e| ChangePasswordError::RepositoryError(e.to_string()))?
            .ok_or(ChangePasswordError::UserNotFound)?;

        let matches = self
            .hasher
            .verify_password(command.current_password(), credentials.password_hash.as_str())
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;

        if !matches {
            let mut errors = FieldErrors::new();
            errors.add("current_password", "Current password is incorrect.");
            return Err(ChangePasswordError::Validation(errors));
        }

        let new_hash = self
            .hasher
            .hash_password(command.new_password())
            .await
            .map_err(|e| ChangePasswordError::HashingFailed(e.to_string()))?;

        self.repository
            .set_password_hash(user_id, new_hash)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => ChangePasswordError::UserNotFound,
                other => ChangePasswordError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user_id, "Password changed");
        Ok(())
    }
}
