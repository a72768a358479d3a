use async_trait::async_trait;

use crate::user::application::{
    domain::entities::{User, UserId},
    ports::{
        incoming::use_cases::{UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase},
        outgoing::{UpdateProfileData, UserRepository, UserRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateProfileUseCase for UpdateProfileService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: UserId,
        command: UpdateProfileCommand,
    ) -> Result<User, UpdateProfileError> {
        let data = UpdateProfileData {
            first_name: command.first_name().map(str::to_string),
            last_name: command.last_name().map(str::to_string),
            bio: command.bio().map(str::to_string),
        };

        self.repository
            .update_profile(user_id, data)
            .await
            .map_err(|e| match e {
                UserRepositoryError::UserNotFound => UpdateProfileError::UserNotFound,
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })
    }
}
