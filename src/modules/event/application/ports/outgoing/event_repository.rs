use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::event::application::domain::entities::{Event, EventId, EventRole};
use crate::group::application::domain::entities::GroupId;
use crate::tag::application::domain::entities::TagId;
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone, PartialEq)]
pub struct NewLocation {
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct CreateEventData {
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub mode: String,
    pub owner_id: UserId,
    pub group_id: Option<GroupId>,
    pub location: NewLocation,
    /// Additional attendees; the owner is added as organizer separately.
    pub attendees: Vec<(UserId, EventRole)>,
    pub tag_ids: Vec<TagId>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum EventRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Event not found")]
    EventNotFound,

    #[error("Attendee listed twice")]
    DuplicateAttendee,

    #[error("Referenced group, user or tag does not exist")]
    MissingReference,
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Location, event, owner attendance, attendees and tag links in one
    /// transaction.
    async fn create_event(&self, data: CreateEventData) -> Result<Event, EventRepositoryError>;

    async fn soft_delete_event(&self, event_id: EventId) -> Result<(), EventRepositoryError>;

    async fn restore_event(&self, event_id: EventId) -> Result<Event, EventRepositoryError>;

    async fn set_event_tags(
        &self,
        event_id: EventId,
        tag_ids: &[TagId],
    ) -> Result<(), EventRepositoryError>;
}
