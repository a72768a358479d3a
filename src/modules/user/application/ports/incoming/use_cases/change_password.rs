use async_trait::async_trait;

use crate::shared::validation::{required, FieldErrors};
use crate::user::application::domain::entities::UserId;

use super::sign_up::MIN_PASSWORD_LEN;

#[derive(Debug, Clone)]
pub struct ChangePasswordCommand {
    current_password: String,
    new_password: String,
}

impl ChangePasswordCommand {
    pub fn new(
        current_password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        required(&mut errors, "current_password", current_password);

        if required(&mut errors, "new_password", new_password).is_some()
            && new_password.chars().count() < MIN_PASSWORD_LEN
        {
            errors.add(
                "new_password",
                format!("Password must have a minimum of {MIN_PASSWORD_LEN} characters."),
            );
        }

        required(&mut errors, "confirm_password", confirm_password);
        if confirm_password != new_password {
            errors.add("confirm_password", "Passwords do not match.");
        }

        errors.into_result()?;

        Ok(Self {
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        })
    }

    pub fn current_password(&self) -> &str {
        &self.current_password
    }

    pub fn new_password(&self) -> &str {
        &self.new_password
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChangePasswordError {
    #[error("Password change rejected: {0}")]
    Validation(FieldErrors),

    #[error("User not found")]
    UserNotFound,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ChangePasswordUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        command: ChangePasswordCommand,
    ) -> Result<(), ChangePasswordError>;
}
