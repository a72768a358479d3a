use async_trait::async_trait;
use tracing::info;

use crate::event::application::domain::entities::{Attendee, EventId, EventRole};
use crate::event::application::helpers::{active_event, require_organizer};
use crate::event::application::ports::{
    incoming::use_cases::{AddAttendeeCommand, AddAttendeeError, AddAttendeeUseCase},
    outgoing::{EventAttendeeRepository, EventAttendeeRepositoryError, EventQuery},
};
use crate::shared::validation::FieldErrors;
use crate::user::application::domain::entities::UserId;
use crate::user::application::helpers::{ResolveUserIdError, UserIdentityResolver};

#[derive(Clone)]
pub struct AddAttendeeService<Q, A>
where
    Q: EventQuery + Send + Sync,
    A: EventAttendeeRepository + Send + Sync,
{
    query: Q,
    attendees: A,
    users: UserIdentityResolver,
}

impl<Q, A> AddAttendeeService<Q, A>
where
    Q: EventQuery + Send + Sync,
    A: EventAttendeeRepository + Send + Sync,
{
    pub fn new(query: Q, attendees: A, users: UserIdentityResolver) -> Self {
        Self {
            query,
            attendees,
            users,
        }
    }
}

#[async_trait]
impl<Q, A> AddAttendeeUseCase for AddAttendeeService<Q, A>
where
    Q: EventQuery + Send + Sync,
    A: EventAttendeeRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: UserId,
        event_id: EventId,
        command: AddAttendeeCommand,
    ) -> Result<Attendee, AddAttendeeError> {
        active_event(&self.query, event_id).await?;

        let user_id = match self.users.by_username(command.username()).await {
            Ok(id) => id,
            Err(ResolveUserIdError::NotFound) => {
                let mut errors = FieldErrors::new();
                errors.add(
                    "username",
                    format!("User '{}' does not exist.", command.username()),
                );
                return Err(AddAttendeeError::Validation(errors));
            }
            Err(ResolveUserIdError::RepositoryError(msg)) => {
                return Err(AddAttendeeError::RepositoryError(msg))
            }
        };

        let self_signup = user_id == actor && command.role() == EventRole::Participant;
        if !self_signup {
            require_organizer(&self.query, event_id, actor).await?;
        }

        let attendee = self
            .attendees
            .add_attendee(event_id, user_id, command.role())
            .await
            .map_err(|e| match e {
                EventAttendeeRepositoryError::AlreadyAttending => {
                    AddAttendeeError::AlreadyAttending
                }
                EventAttendeeRepositoryError::MissingReference => AddAttendeeError::EventNotFound,
                other => AddAttendeeError::RepositoryError(other.to_string()),
            })?;

        info!(
            event_id = %event_id,
            user_id = %user_id,
            role = attendee.role.as_str(),
            "Attendee added to event"
        );
        Ok(attendee)
    }
}
