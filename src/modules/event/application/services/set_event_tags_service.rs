use async_trait::async_trait;
use tracing::info;

use crate::event::application::domain::entities::EventId;
use crate::event::application::helpers::require_organizer;
use crate::event::application::ports::{
    incoming::use_cases::{SetEventTagsError, SetEventTagsUseCase},
    outgoing::{EventQuery, EventRepository, EventRepositoryError},
};
use crate::shared::validation::FieldErrors;
use crate::tag::application::domain::entities::Tag;
use crate::tag::application::helpers::TagResolver;
use crate::user::application::domain::entities::UserId;

#[derive(Clone)]
pub struct SetEventTagsService<Q, R>
where
    Q: EventQuery + Send + Sync,
    R: EventRepository + Send + Sync,
{
    query: Q,
    repository: R,
    tags: TagResolver,
}

impl<Q, R> SetEventTagsService<Q, R>
where
    Q: EventQuery + Send + Sync,
    R: EventRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R, tags: TagResolver) -> Self {
        Self {
            query,
            repository,
            tags,
        }
    }
}

#[async_trait]
impl<Q, R> SetEventTagsUseCase for SetEventTagsService<Q, R>
where
    Q: EventQuery + Send + Sync,
    R: EventRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: UserId,
        event_id: EventId,
        tag_ids: Vec<i32>,
    ) -> Result<Vec<Tag>, SetEventTagsError> {
        require_organizer(&self.query, event_id, actor).await?;

        let mut errors = FieldErrors::new();
        let resolved = self
            .tags
            .resolve_active(&tag_ids, &mut errors)
            .await
            .map_err(|e| SetEventTagsError::RepositoryError(e.to_string()))?;
        errors.into_result().map_err(SetEventTagsError::Validation)?;

        self.repository
            .set_event_tags(event_id, &resolved)
            .await
            .map_err(|e| match e {
                EventRepositoryError::EventNotFound => SetEventTagsError::EventNotFound,
                other => SetEventTagsError::RepositoryError(other.to_string()),
            })?;

        info!(event_id = %event_id, count = resolved.len(), "Event tags replaced");

        self.query
            .list_event_tags(event_id)
            .await
            .map_err(|e| SetEventTagsError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::tag::application::domain::entities::TagId;
    use crate::tests::support::fixtures::{sample_event, sample_tag};
    use crate::tests::support::mocks::{
        MockEventQueryPort, MockEventRepositoryPort, MockTagQueryPort,
    };

    fn tag_resolver() -> TagResolver {
        let mut tags = MockTagQueryPort::new();
        tags.expect_find_by_ids()
            .returning(|_| Ok(vec![sample_tag(1, "outdoors"), sample_tag(2, "running")]));
        TagResolver::new(Arc::new(tags))
    }

    fn event_query() -> MockEventQueryPort {
        let mut query = MockEventQueryPort::new();
        query
            .expect_find_by_id()
            .returning(|_| Ok(Some(sample_event(1, "Morning Run", 10))));
        query
    }

    #[tokio::test]
    async fn owner_replaces_tags() {
        let mut query = event_query();
        query
            .expect_list_event_tags()
            .returning(|_| Ok(vec![sample_tag(2, "running")]));

        let mut repo = MockEventRepositoryPort::new();
        repo.expect_set_event_tags()
            .withf(|_, ids| ids.to_vec() == vec![TagId::from(2)])
            .times(1)
            .returning(|_, _| Ok(()));

        let tags = SetEventTagsService::new(query, repo, tag_resolver())
            .execute(UserId::from(10), EventId::from(1), vec![2, 2])
            .await
            .unwrap();

        assert_eq!(tags.len(), 1);
        assert_eq!(tags[0].name, "running");
    }

    #[tokio::test]
    async fn unknown_tag_is_rejected() {
        let mut repo = MockEventRepositoryPort::new();
        repo.expect_set_event_tags().never();

        let result = SetEventTagsService::new(event_query(), repo, tag_resolver())
            .execute(UserId::from(10), EventId::from(1), vec![5])
            .await;

        match result {
            Err(SetEventTagsError::Validation(errors)) => assert_eq!(
                errors.get("tags"),
                Some(&["Unknown tag id 5.".to_string()][..])
            ),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_organizer_is_forbidden() {
        let mut query = event_query();
        query.expect_find_attendance().returning(|_, _| Ok(None));

        let mut repo = MockEventRepositoryPort::new();
        repo.expect_set_event_tags().never();

        let result = SetEventTagsService::new(query, repo, tag_resolver())
            .execute(UserId::from(77), EventId::from(1), vec![1])
            .await;

        assert!(matches!(result, Err(SetEventTagsError::Forbidden)));
    }
}
