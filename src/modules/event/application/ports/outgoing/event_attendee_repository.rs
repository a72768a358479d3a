use async_trait::async_trait;

use crate::event::application::domain::entities::{Attendee, EventId, EventRole};
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum EventAttendeeRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("User is already attending this event")]
    AlreadyAttending,

    #[error("Attendance not found")]
    AttendanceNotFound,

    #[error("Event or user does not exist")]
    MissingReference,
}

#[async_trait]
pub trait EventAttendeeRepository: Send + Sync {
    async fn add_attendee(
        &self,
        event_id: EventId,
        user_id: UserId,
        role: EventRole,
    ) -> Result<Attendee, EventAttendeeRepositoryError>;

    async fn remove_attendee(
        &self,
        event_id: EventId,
        user_id: UserId,
    ) -> Result<(), EventAttendeeRepositoryError>;
}
