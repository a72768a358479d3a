use async_trait::async_trait;

use crate::user::application::domain::entities::{User, UserId};

#[derive(Debug, Clone)]
pub struct CreateUserData {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub bio: Option<String>,
}

/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileData {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UserRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("User not found")]
    UserNotFound,

    #[error("User already exists")]
    UserAlreadyExists,
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;

    async fn update_profile(
        &self,
        user_id: UserId,
        data: UpdateProfileData,
    ) -> Result<User, UserRepositoryError>;

    async fn set_password_hash(
        &self,
        user_id: UserId,
        password_hash: String,
    ) -> Result<(), UserRepositoryError>;

    /// Hard delete. Owned groups, events and every membership or
    /// attendance row go with it through the foreign-key cascade.
    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError>;
}
