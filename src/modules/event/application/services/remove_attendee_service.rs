use async_trait::async_trait;
use tracing::info;

use crate::event::application::domain::entities::EventId;
use crate::event::application::helpers::{active_event, require_organizer};
use crate::event::application::ports::{
    incoming::use_cases::{RemoveAttendeeError, RemoveAttendeeUseCase},
    outgoing::{EventAttendeeRepository, EventAttendeeRepositoryError, EventQuery},
};
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct RemoveAttendeeService<Q, A>
where
    Q: EventQuery + Send + Sync,
    A: EventAttendeeRepository + Send + Sync,
{
    query: Q,
    attendees: A,
}

impl<Q, A> RemoveAttendeeService<Q, A>
where
    Q: EventQuery + Send + Sync,
    A: EventAttendeeRepository + Send + Sync,
{
    pub fn new(query: Q, attendees: A) -> Self {
        Self { query, attendees }
    }
}

#[async_trait]
impl<Q, A> RemoveAttendeeUseCase for RemoveAttendeeService<Q, A>
where
    Q: EventQuery + Send + Sync,
    A: EventAttendeeRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: UserId,
        event_id: EventId,
        user_id: UserId,
    ) -> Result<(), RemoveAttendeeError> {
        let event = if actor == user_id {
            active_event(&self.query, event_id).await?
        } else {
            require_organizer(&self.query, event_id, actor).await?
        };

        if event.owner_id == user_id {
            return Err(RemoveAttendeeError::CannotRemoveOwner);
        }

        self.attendees
            .remove_attendee(event_id, user_id)
            .await
            .map_err(|e| match e {
                EventAttendeeRepositoryError::AttendanceNotFound => {
                    RemoveAttendeeError::AttendanceNotFound
                }
                other => RemoveAttendeeError::RepositoryError(other.to_string()),
            })?;

        info!(event_id = %event_id, user_id = %user_id, "Attendee removed from event");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::application::domain::entities::EventRole;
    use crate::tests::support::fixtures::{sample_attendee, sample_event};
    use crate::tests::support::mocks::{MockEventAttendeeRepositoryPort, MockEventQueryPort};

    fn event_query() -> MockEventQueryPort {
        let mut query = MockEventQueryPort::new();
        query
            .expect_find_by_id()
            .returning(|_| Ok(Some(sample_event(1, "Morning Run", 10))));
        query
    }

    #[tokio::test]
    async fn attendee_can_leave() {
        let mut repo = MockEventAttendeeRepositoryPort::new();
        repo.expect_remove_attendee()
            .withf(|e, u| *e == EventId::from(1) && *u == UserId::from(11))
            .times(1)
            .returning(|_, _| Ok(()));

        RemoveAttendeeService::new(event_query(), repo)
            .execute(UserId::from(11), EventId::from(1), UserId::from(11))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn organizer_removes_someone_else() {
        let mut query = event_query();
        query.expect_find_attendance().returning(|e, u| {
            Ok(Some(sample_attendee(e.value(), u.value(), EventRole::Organizer)))
        });

        let mut repo = MockEventAttendeeRepositoryPort::new();
        repo.expect_remove_attendee().times(1).returning(|_, _| Ok(()));

        RemoveAttendeeService::new(query, repo)
            .execute(UserId::from(12), EventId::from(1), UserId::from(11))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn participant_cannot_remove_others() {
        let mut query = event_query();
        query.expect_find_attendance().returning(|e, u| {
            Ok(Some(sample_attendee(e.value(), u.value(), EventRole::Participant)))
        });

        let mut repo = MockEventAttendeeRepositoryPort::new();
        repo.expect_remove_attendee().never();

        let result = RemoveAttendeeService::new(query, repo)
            .execute(UserId::from(12), EventId::from(1), UserId::from(11))
            .await;

        assert!(matches!(result, Err(RemoveAttendeeError::Forbidden)));
    }

    #[tokio::test]
    async fn owner_attendance_is_fixed() {
        let mut repo = MockEventAttendeeRepositoryPort::new();
        repo.expect_remove_attendee().never();

        let result = RemoveAttendeeService::new(event_query(), repo)
            .execute(UserId::from(10), EventId::from(1), UserId::from(10))
            .await;

        assert!(matches!(result, Err(RemoveAttendeeError::CannotRemoveOwner)));
    }

    #[tokio::test]
    async fn missing_attendance_is_reported() {
        let mut repo = MockEventAttendeeRepositoryPort::new();
        repo.expect_remove_attendee()
            .returning(|_, _| Err(EventAttendeeRepositoryError::AttendanceNotFound));

        let result = RemoveAttendeeService::new(event_query(), repo)
            .execute(UserId::from(10), EventId::from(1), UserId::from(30))
            .await;

        assert!(matches!(result, Err(RemoveAttendeeError::AttendanceNotFound)));
    }
}
