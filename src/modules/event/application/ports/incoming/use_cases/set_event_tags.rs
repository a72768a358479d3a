use async_trait::async_trait;

use crate::event::application::domain::entities::EventId;
use crate::shared::validation::FieldErrors;
use crate::tag::application::domain::entities::Tag;
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum SetEventTagsError {
    #[error("Tags rejected: {0}")]
    Validation(FieldErrors),

    #[error("Event not found")]
    EventNotFound,

    #[error("Not permitted to edit this event")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait SetEventTagsUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: UserId,
        event_id: EventId,
        tag_ids: Vec<i32>,
    ) -> Result<Vec<Tag>, SetEventTagsError>;
}
