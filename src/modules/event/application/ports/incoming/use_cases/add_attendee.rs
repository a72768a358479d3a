use async_trait::async_trait;

use super::create_event::parse_event_role;
use crate::event::application::domain::entities::{Attendee, EventId, EventRole};
use crate::shared::validation::{required, FieldErrors};
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct AddAttendeeCommand {
    username: String,
    role: EventRole,
}

impl AddAttendeeCommand {
    /// `role` defaults to participant when omitted.
    pub fn new(username: &str, role: Option<&str>) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let username = required(&mut errors, "username", username).map(str::to_string);
        let role = parse_event_role(&mut errors, "role", role);

        errors.into_result()?;

        Ok(Self {
            username: username.unwrap_or_default(),
            role: role.unwrap_or_default(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> EventRole {
        self.role
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddAttendeeError {
    #[error("Attendee rejected: {0}")]
    Validation(FieldErrors),

    #[error("Event not found")]
    EventNotFound,

    #[error("Not permitted to manage attendees of this event")]
    Forbidden,

    #[error("User is already attending this event")]
    AlreadyAttending,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Anyone may sign themselves up as a participant; every other addition
/// takes the owner or an organizer.
#[async_trait]
pub trait AddAttendeeUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: UserId,
        event_id: EventId,
        command: AddAttendeeCommand,
    ) -> Result<Attendee, AddAttendeeError>;
}
