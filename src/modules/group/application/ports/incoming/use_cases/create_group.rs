use async_trait::async_trait;

use crate::group::application::domain::entities::{Group, DEFAULT_GROUP_DESCRIPTION};
use crate::shared::validation::{check_max_len, check_name_boundaries, required, FieldErrors};
use crate::user::application::domain::entities::UserId;

pub const MAX_GROUP_NAME_LEN: usize = 100;
pub const MAX_GROUP_DESCRIPTION_LEN: usize = 500;

#[derive(Debug, Clone, Default)]
pub struct CreateGroupForm {
    pub name: String,
    pub description: Option<String>,
    pub tags: Vec<i32>,
}

#[derive(Debug, Clone)]
pub struct CreateGroupCommand {
    name: String,
    description: String,
    tags: Vec<i32>,
}

/// Name rules shared by creation and rename.
pub(crate) fn validate_group_name<'a>(errors: &mut FieldErrors, name: &'a str) -> Option<&'a str> {
    required(errors, "name", name)
        .filter(|v| check_max_len(errors, "name", "Name", v, MAX_GROUP_NAME_LEN))
        .filter(|v| check_name_boundaries(errors, "name", "Name", v))
}

/// Blank descriptions fall back to the default text.
pub(crate) fn validate_group_description(
    errors: &mut FieldErrors,
    description: &str,
) -> Option<String> {
    let description = description.trim();
    if description.is_empty() {
        return Some(DEFAULT_GROUP_DESCRIPTION.to_string());
    }
    check_max_len(
        errors,
        "description",
        "Description",
        description,
        MAX_GROUP_DESCRIPTION_LEN,
    )
    .then(|| description.to_string())
}

impl CreateGroupCommand {
    pub fn new(form: CreateGroupForm) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = validate_group_name(&mut errors, &form.name).map(str::to_string);
        let description =
            validate_group_description(&mut errors, form.description.as_deref().unwrap_or(""));

        errors.into_result()?;

        Ok(Self {
            name: name.unwrap_or_default(),
            description: description.unwrap_or_default(),
            tags: form.tags,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn tags(&self) -> &[i32] {
        &self.tags
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateGroupError {
    #[error("Group rejected: {0}")]
    Validation(FieldErrors),

    #[error("Group already exists")]
    GroupAlreadyExists,

    /// The caller's account was deleted after their token was issued.
    #[error("Owner account no longer exists")]
    OwnerNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateGroupUseCase: Send + Sync {
    async fn execute(
        &self,
        owner_id: UserId,
        command: CreateGroupCommand,
    ) -> Result<Group, CreateGroupError>;
}
