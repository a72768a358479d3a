use async_trait::async_trait;

use crate::event::application::domain::entities::EventId;
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoveAttendeeError {
    #[error("Event not found")]
    EventNotFound,

    #[error("Not permitted to manage attendees of this event")]
    Forbidden,

    #[error("The event owner cannot be removed")]
    CannotRemoveOwner,

    #[error("Attendance not found")]
    AttendanceNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait RemoveAttendeeUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: UserId,
        event_id: EventId,
        user_id: UserId,
    ) -> Result<(), RemoveAttendeeError>;
}
