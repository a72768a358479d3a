use async_trait::async_trait;

use crate::group::application::domain::entities::{Group, GroupId};
use crate::shared::validation::FieldErrors;
use crate::user::application::domain::entities::UserId;

use super::create_group::{validate_group_description, validate_group_name};

#[derive(Debug, Clone, Default)]
pub struct UpdateGroupCommand {
    name: Option<String>,
    description: Option<String>,
}

impl UpdateGroupCommand {
    pub fn new(name: Option<&str>, description: Option<&str>) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = name
            .and_then(|v| validate_group_name(&mut errors, v))
            .map(str::to_string);
        let description = description.and_then(|v| validate_group_description(&mut errors, v));

        errors.into_result()?;

        Ok(Self { name, description })
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateGroupError {
    #[error("Group update rejected: {0}")]
    Validation(FieldErrors),

    #[error("Group not found")]
    GroupNotFound,

    #[error("Not permitted to edit this group")]
    Forbidden,

    #[error("Group already exists")]
    GroupAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait UpdateGroupUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: UserId,
        group_id: GroupId,
        command: UpdateGroupCommand,
    ) -> Result<Group, UpdateGroupError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_fields_stay_absent() {
        let command = UpdateGroupCommand::new(None, None).unwrap();
        assert!(command.name().is_none());
        assert!(command.description().is_none());
    }

    #[test]
    fn blank_name_is_rejected() {
        let errors = UpdateGroupCommand::new(Some("  "), None).unwrap_err();
        assert!(errors.has("name"));
    }
}
