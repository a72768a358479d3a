use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::event::application::domain::entities::{Event, EventRole};
use crate::event::application::ports::{
    incoming::use_cases::{
        attendee_field, CreateEventCommand, CreateEventError, CreateEventUseCase,
    },
    outgoing::{CreateEventData, EventRepository, EventRepositoryError},
};
use crate::group::application::helpers::{active_group, GroupAccessError};
use crate::group::application::ports::outgoing::GroupQuery;
use crate::shared::validation::FieldErrors;
use crate::tag::application::helpers::TagResolver;
use crate::user::application::domain::entities::UserId;
use crate::user::application::helpers::{ResolveUserIdError, UserIdentityResolver};

#[derive(Clone)]
pub struct CreateEventService<R>
where
    R: EventRepository + Send + Sync,
{
    repository: R,
    groups: Arc<dyn GroupQuery + Send + Sync>,
    users: UserIdentityResolver,
    tags: TagResolver,
}

impl<R> CreateEventService<R>
where
    R: EventRepository + Send + Sync,
{
    pub fn new(
        repository: R,
        groups: Arc<dyn GroupQuery + Send + Sync>,
        users: UserIdentityResolver,
        tags: TagResolver,
    ) -> Self {
        Self {
            repository,
            groups,
            users,
            tags,
        }
    }

    async fn check_group(
        &self,
        command: &CreateEventCommand,
        errors: &mut FieldErrors,
    ) -> Result<(), CreateEventError> {
        let Some(group_id) = command.group_id() else {
            return Ok(());
        };

        match active_group(self.groups.as_ref(), group_id).await {
            Ok(_) => Ok(()),
            Err(GroupAccessError::RepositoryError(msg)) => {
                Err(CreateEventError::RepositoryError(msg))
            }
            Err(_) => {
                errors.add("group_id", format!("Unknown group id {group_id}."));
                Ok(())
            }
        }
    }

    async fn resolve_attendees(
        &self,
        owner_id: UserId,
        command: &CreateEventCommand,
        errors: &mut FieldErrors,
    ) -> Result<Vec<(UserId, EventRole)>, CreateEventError> {
        let mut seen = HashSet::new();
        let mut resolved = Vec::with_capacity(command.attendees().len());

        for (index, (username, role)) in command.attendees().iter().enumerate() {
            let field = attendee_field(index, "username");
            match self.users.by_username(username).await {
                Ok(user_id) if user_id == owner_id => {
                    errors.add(field, "The event owner is already an organizer.");
                }
                Ok(user_id) => {
                    if seen.insert(user_id) {
                        resolved.push((user_id, *role));
                    } else {
                        errors.add(field, format!("User '{username}' is listed more than once."));
                    }
                }
                Err(ResolveUserIdError::NotFound) => {
                    errors.add(field, format!("User '{username}' does not exist."));
                }
                Err(ResolveUserIdError::RepositoryError(msg)) => {
                    return Err(CreateEventError::RepositoryError(msg));
                }
            }
        }

        Ok(resolved)
    }
}

#[async_trait]
impl<R> CreateEventUseCase for CreateEventService<R>
where
    R: EventRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner_id: UserId,
        command: CreateEventCommand,
    ) -> Result<Event, CreateEventError> {
        self.users
            .ensure_exists(owner_id)
            .await
            .map_err(|e| match e {
                ResolveUserIdError::NotFound => CreateEventError::OwnerNotFound,
                ResolveUserIdError::RepositoryError(msg) => CreateEventError::RepositoryError(msg),
            })?;

        let mut errors = FieldErrors::new();

        self.check_group(&command, &mut errors).await?;
        let attendees = self
            .resolve_attendees(owner_id, &command, &mut errors)
            .await?;
        let tag_ids = self
            .tags
            .resolve_active(command.tags(), &mut errors)
            .await
            .map_err(|e| CreateEventError::RepositoryError(e.to_string()))?;

        errors.into_result().map_err(CreateEventError::Validation)?;

        let event = self
            .repository
            .create_event(CreateEventData {
                title: command.title().to_string(),
                description: command.description().to_string(),
                start_date: command.start_date(),
                end_date: command.end_date(),
                mode: command.mode().to_string(),
                owner_id,
                group_id: command.group_id(),
                location: command.location().clone(),
                attendees,
                tag_ids,
            })
            .await
            .map_err(|e| match e {
                EventRepositoryError::DuplicateAttendee => CreateEventError::DuplicateAttendee,
                EventRepositoryError::MissingReference => CreateEventError::ReferenceNotFound,
                other => CreateEventError::RepositoryError(other.to_string()),
            })?;

        info!(event_id = %event.id, owner_id = %owner_id, "Event created");
        Ok(event)
    }
}
