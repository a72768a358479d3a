use async_trait::async_trait;

use crate::event::application::domain::entities::EventId;
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteEventError {
    #[error("Event not found")]
    EventNotFound,

    #[error("Only the owner can delete this event")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteEventUseCase: Send + Sync {
    async fn execute(&self, actor: UserId, event_id: EventId) -> Result<(), DeleteEventError>;
}
