use async_trait::async_trait;

use crate::event::application::domain::entities::{EventDetails, EventId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetEventError {
    #[error("Event not found")]
    EventNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetEventUseCase: Send + Sync {
    async fn execute(&self, event_id: EventId) -> Result<EventDetails, GetEventError>;
}
