use async_trait::async_trait;

use crate::shared::validation::{check_max_len, check_name_boundaries, required, FieldErrors};
use crate::tag::application::domain::entities::Tag;

pub const MAX_TAG_NAME_LEN: usize = 100;

#[derive(Debug, Clone)]
pub struct CreateTagCommand {
    name: String,
}

impl CreateTagCommand {
    pub fn new(name: &str) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = required(&mut errors, "name", name)
            .filter(|v| check_max_len(&mut errors, "name", "Name", v, MAX_TAG_NAME_LEN))
            .filter(|v| check_name_boundaries(&mut errors, "name", "Name", v))
            .map(str::to_string);

        errors.into_result()?;

        Ok(Self {
            name: name.unwrap_or_default(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CreateTagError {
    #[error("Tag rejected: {0}")]
    Validation(FieldErrors),

    #[error("Tag already exists")]
    TagAlreadyExists,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait CreateTagUseCase: Send + Sync {
    async fn execute(&self, command: CreateTagCommand) -> Result<Tag, CreateTagError>;
}
