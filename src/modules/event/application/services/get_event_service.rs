use async_trait::async_trait;

use crate::event::application::domain::entities::{Event, EventDetails, EventId};
use crate::event::application::helpers::{load_event, EventAccessError};
use crate::event::application::ports::{
    incoming::use_cases::{GetEventError, GetEventUseCase, ListEventsError, ListEventsUseCase},
    outgoing::EventQuery,
};
use crate::group::application::domain::entities::GroupId;

#[derive(Debug, Clone)]
pub struct GetEventService<Q>
where
    Q: EventQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetEventService<Q>
where
    Q: EventQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetEventUseCase for GetEventService<Q>
where
    Q: EventQuery + Send + Sync,
{
    async fn execute(&self, event_id: EventId) -> Result<EventDetails, GetEventError> {
        let event = load_event(&self.query, event_id)
            .await
            .map_err(|e| match e {
                EventAccessError::RepositoryError(msg) => GetEventError::RepositoryError(msg),
                _ => GetEventError::EventNotFound,
            })?;

        let location = self
            .query
            .find_location(event.location_id)
            .await
            .map_err(|e| GetEventError::RepositoryError(e.to_string()))?
            .ok_or_else(|| {
                GetEventError::RepositoryError(format!(
                    "location {} of event {} is missing",
                    event.location_id, event.id
                ))
            })?;

        let attendees = self
            .query
            .list_attendees(event_id)
            .await
            .map_err(|e| GetEventError::RepositoryError(e.to_string()))?;

        let tags = self
            .query
            .list_event_tags(event_id)
            .await
            .map_err(|e| GetEventError::RepositoryError(e.to_string()))?;

        Ok(EventDetails {
            event,
            location,
            attendees,
            tags,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ListEventsService<Q>
where
    Q: EventQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListEventsService<Q>
where
    Q: EventQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListEventsUseCase for ListEventsService<Q>
where
    Q: EventQuery + Send + Sync,
{
    async fn execute(&self, group_id: Option<GroupId>) -> Result<Vec<Event>, ListEventsError> {
        let events = match group_id {
            Some(group_id) => self.query.list_group_events(group_id).await,
            None => self.query.list_active_events().await,
        };
        events.map_err(|e| ListEventsError::QueryFailed(e.to_string()))
    }
}
