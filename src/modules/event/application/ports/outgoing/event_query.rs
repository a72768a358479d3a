use async_trait::async_trait;

use crate::event::application::domain::entities::{
    Attendee, Event, EventId, Location, LocationId,
};
use crate::group::application::domain::entities::GroupId;
use crate::tag::application::domain::entities::Tag;
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum EventQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait EventQuery: Send + Sync {
    /// Returns soft-deleted events too.
    async fn find_by_id(&self, event_id: EventId) -> Result<Option<Event>, EventQueryError>;

    async fn list_active_events(&self) -> Result<Vec<Event>, EventQueryError>;

    async fn list_group_events(&self, group_id: GroupId) -> Result<Vec<Event>, EventQueryError>;

    async fn list_attendees(&self, event_id: EventId) -> Result<Vec<Attendee>, EventQueryError>;

    async fn find_attendance(
        &self,
        event_id: EventId,
        user_id: UserId,
    ) -> Result<Option<Attendee>, EventQueryError>;

    /// Active tags linked to the event.
    async fn list_event_tags(&self, event_id: EventId) -> Result<Vec<Tag>, EventQueryError>;

    async fn find_location(
        &self,
        location_id: LocationId,
    ) -> Result<Option<Location>, EventQueryError>;
}
