use async_trait::async_trait;
use tracing::info;

use crate::event::application::domain::entities::{Event, EventId};
use crate::event::application::helpers::require_event_owner;
use crate::event::application::ports::{
    incoming::use_cases::{
        DeleteEventError, DeleteEventUseCase, RestoreEventError, RestoreEventUseCase,
    },
    outgoing::{EventQuery, EventRepository, EventRepositoryError},
};
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct DeleteEventService<Q, R>
where
    Q: EventQuery + Send + Sync,
    R: EventRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteEventService<Q, R>
where
    Q: EventQuery + Send + Sync,
    R: EventRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeleteEventUseCase for DeleteEventService<Q, R>
where
    Q: EventQuery + Send + Sync,
    R: EventRepository + Send + Sync,
{
    async fn execute(&self, actor: UserId, event_id: EventId) -> Result<(), DeleteEventError> {
        require_event_owner(&self.query, event_id, actor).await?;

        self.repository
            .soft_delete_event(event_id)
            .await
            .map_err(|e| match e {
                EventRepositoryError::EventNotFound => DeleteEventError::EventNotFound,
                other => DeleteEventError::RepositoryError(other.to_string()),
            })?;

        info!(event_id = %event_id, "Event soft-deleted");
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct RestoreEventService<Q, R>
where
    Q: EventQuery + Send + Sync,
    R: EventRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> RestoreEventService<Q, R>
where
    Q: EventQuery + Send + Sync,
    R: EventRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> RestoreEventUseCase for RestoreEventService<Q, R>
where
    Q: EventQuery + Send + Sync,
    R: EventRepository + Send + Sync,
{
    async fn execute(&self, actor: UserId, event_id: EventId) -> Result<Event, RestoreEventError> {
        let event = require_event_owner(&self.query, event_id, actor).await?;
        if !event.is_deleted {
            return Ok(event);
        }

        let restored = self
            .repository
            .restore_event(event_id)
            .await
            .map_err(|e| match e {
                EventRepositoryError::EventNotFound => RestoreEventError::EventNotFound,
                other => RestoreEventError::RepositoryError(other.to_string()),
            })?;

        info!(event_id = %event_id, "Event restored");
        Ok(restored)
    }
}
