use async_trait::async_trait;

use crate::event::application::domain::entities::{Event, EventId};
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RestoreEventError {
    #[error("Event not found")]
    EventNotFound,

    #[error("Only the owner can restore this event")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RestoreEventUseCase: Send + Sync {
    async fn execute(&self, actor: UserId, event_id: EventId) -> Result<Event, RestoreEventError>;
}
