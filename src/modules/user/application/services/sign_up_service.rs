use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::shared::validation::FieldErrors;
use crate::user::application::{
    domain::entities::User,
    ports::{
        incoming::use_cases::{SignUpCommand, SignUpError, SignUpUseCase},
        outgoing::{CreateUserData, PasswordHasher, UserQuery, UserRepository, UserRepositoryError},
    },
};

#[derive(Clone)]
pub struct SignUpService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    query: Q,
    repository: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
}

impl<Q, R> SignUpService<Q, R>
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

    async fn check_availability(&self, command: &SignUpCommand) -> Result<(), SignUpError> {
        let mut errors = FieldErrors::new();

        let username_taken = self
            .query
            .find_by_username(command.username())
            .await
            .map_err(|e| SignUpError::RepositoryError(e.to_string()))?
            .is_some();
        if username_taken {
            errors.add("username", "This username is not available");
        }

        let email_taken = self
            .query
            .find_by_email(command.email())
            .await
            .map_err(|e| SignUpError::RepositoryError(e.to_string()))?
            .is_some();
        if email_taken {
            errors.add("email", "This email address is not available");
        }

        errors.into_result().map_err(SignUpError::Validation)
    }
}

#[async_trait]
impl<Q, R> SignUpUseCase for SignUpService<Q, R>
where
    Q: UserQuery + Send + Sync,
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: SignUpCommand) -> Result<User, SignUpError> {
        self.check_availability(&command).await?;

        let password_hash = self
            .hasher
            .hash_password(command.password())
            .await
            .map_err(|e| SignUpError::HashingFailed(e.to_string()))?;

        let data = CreateUserData {
            username: command.username().to_string(),
            first_name: command.first_name().to_string(),
            last_name: command.last_name().to_string(),
            email: command.email().to_string(),
            password_hash,
            bio: command.bio().map(str::to_string),
        };

        let user = self
            .repository
            .create_user(data)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserAlreadyExists => SignUpError::UserAlreadyExists,
                other => SignUpError::RepositoryError(other.to_string()),
            })?;

        info!(user_id = %user.id, username = %user.username, "User signed up");
        Ok(user)
    }
}
