use async_trait::async_trait;

use crate::group::application::domain::entities::GroupId;
use crate::shared::validation::FieldErrors;
use crate::tag::application::domain::entities::Tag;
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SetGroupTagsError {
    #[error("Tags rejected: {0}")]
    Validation(FieldErrors),

    #[error("Group not found")]
    GroupNotFound,

    #[error("Not permitted to edit this group")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SetGroupTagsUseCase: Send + Sync {
    /// Replaces the tag set and returns the group's tags afterwards.
    async fn execute(
        &self,
        actor: UserId,
        group_id: GroupId,
        tag_ids: Vec<i32>,
    ) -> Result<Vec<Tag>, SetGroupTagsError>;
}
