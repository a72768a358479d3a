use async_trait::async_trait;

use crate::shared::validation::{check_max_len, required, FieldErrors};
use crate::user::application::domain::entities::{User, UserId, DEFAULT_BIO};

/// Partial profile update. Absent fields are left untouched; a blank bio
/// resets it to the default.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileCommand {
    first_name: Option<String>,
    last_name: Option<String>,
    bio: Option<String>,
}

impl UpdateProfileCommand {
    pub fn new(
        first_name: Option<&str>,
        last_name: Option<&str>,
        bio: Option<&str>,
    ) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let first_name = first_name
            .and_then(|v| required(&mut errors, "first_name", v))
            .filter(|v| check_max_len(&mut errors, "first_name", "First name", v, 40))
            .map(str::to_string);

        let last_name = last_name
            .and_then(|v| required(&mut errors, "last_name", v))
            .filter(|v| check_max_len(&mut errors, "last_name", "Last name", v, 40))
            .map(str::to_string);

        let bio = bio.map(str::trim).and_then(|v| {
            if v.is_empty() {
                Some(DEFAULT_BIO.to_string())
            } else if check_max_len(&mut errors, "bio", "Bio", v, 350) {
                Some(v.to_string())
            } else {
                None
            }
        });

        errors.into_result()?;

        Ok(Self {
            first_name,
            last_name,
            bio,
        })
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateProfileError {
    #[error("User not found")]
    UserNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: UserId,
        command: UpdateProfileCommand,
    ) -> Result<User, UpdateProfileError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_stay_absent() {
        let command = UpdateProfileCommand::new(None, None, None).unwrap();
        assert_eq!(command.first_name(), None);
        assert_eq!(command.last_name(), None);
        assert_eq!(command.bio(), None);
    }

    #[test]
    fn blank_bio_resets_to_default() {
        let command = UpdateProfileCommand::new(None, None, Some("   ")).unwrap();
        assert_eq!(command.bio(), Some("No bio"));
    }

    #[test]
    fn blank_name_is_rejected() {
        let errors = UpdateProfileCommand::new(Some(" "), None, None).unwrap_err();
        assert!(errors.has("first_name"));
    }

    #[test]
    fn long_values_are_rejected() {
        let long_name = "n".repeat(41);
        let long_bio = "b".repeat(351);
        let errors =
            UpdateProfileCommand::new(None, Some(&long_name), Some(&long_bio)).unwrap_err();
        assert!(errors.has("last_name"));
        assert!(errors.has("bio"));
    }
}
