use async_trait::async_trait;
use serde::Serialize;
use utoipa::ToSchema;

use crate::shared::validation::{required, FieldErrors};
use crate::user::application::domain::entities::User;

#[derive(Debug, Clone)]
pub struct LoginCommand {
    username: String,
    password: String,
}

impl LoginCommand {
    pub fn new(username: &str, password: &str) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let username = required(&mut errors, "username", username).map(str::to_string);
        required(&mut errors, "password", password);
        errors.into_result()?;

        Ok(Self {
            username: username.unwrap_or_default(),
            password: password.to_string(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuthSession {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: User,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AuthenticateUserError {
    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AuthenticateUserUseCase: Send + Sync {
    async fn execute(&self, command: LoginCommand) -> Result<AuthSession, AuthenticateUserError>;
}
