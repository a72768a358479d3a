use crate::event::application::domain::entities::{Event, EventId};
use crate::event::application::ports::incoming::use_cases::{
    AddAttendeeError, DeleteEventError, RemoveAttendeeError, RestoreEventError,
    SetEventTagsError,
};
use crate::event::application::ports::outgoing::EventQuery;
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum EventAccessError {
    #[error("Event not found")]
    EventNotFound,

    #[error("Not permitted for this event")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

pub async fn load_event<Q>(query: &Q, event_id: EventId) -> Result<Event, EventAccessError>
where
    Q: EventQuery + ?Sized,
{
    query
        .find_by_id(event_id)
        .await
        .map_err(|e| EventAccessError::RepositoryError(e.to_string()))?
        .ok_or(EventAccessError::EventNotFound)
}

/// Soft-deleted events are reported as missing.
pub async fn active_event<Q>(query: &Q, event_id: EventId) -> Result<Event, EventAccessError>
where
    Q: EventQuery + ?Sized,
{
    let event = load_event(query, event_id).await?;
    if event.is_deleted {
        return Err(EventAccessError::EventNotFound);
    }
    Ok(event)
}

pub async fn require_event_owner<Q>(
    query: &Q,
    event_id: EventId,
    actor: UserId,
) -> Result<Event, EventAccessError>
where
    Q: EventQuery + ?Sized,
{
    let event = load_event(query, event_id).await?;
    if event.owner_id != actor {
        return Err(EventAccessError::Forbidden);
    }
    Ok(event)
}

/// Owner or organizer of an active event.
pub async fn require_organizer<Q>(
    query: &Q,
    event_id: EventId,
    actor: UserId,
) -> Result<Event, EventAccessError>
where
    Q: EventQuery + ?Sized,
{
    let event = active_event(query, event_id).await?;
    if event.owner_id == actor {
        return Ok(event);
    }

    let attendance = query
        .find_attendance(event_id, actor)
        .await
        .map_err(|e| EventAccessError::RepositoryError(e.to_string()))?;

    match attendance {
        Some(attendee) if attendee.role.can_manage_event() => Ok(event),
        _ => Err(EventAccessError::Forbidden),
    }
}

macro_rules! from_access_error {
    ($($target:ident),+ $(,)?) => {
        $(
            impl From<EventAccessError> for $target {
                fn from(err: EventAccessError) -> Self {
                    match err {
                        EventAccessError::EventNotFound => $target::EventNotFound,
                        EventAccessError::Forbidden => $target::Forbidden,
                        EventAccessError::RepositoryError(msg) => $target::RepositoryError(msg),
                    }
                }
            }
        )+
    };
}

from_access_error!(
    AddAttendeeError,
    DeleteEventError,
    RemoveAttendeeError,
    RestoreEventError,
    SetEventTagsError,
);
