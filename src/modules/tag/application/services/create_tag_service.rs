use async_trait::async_trait;
use tracing::info;

use crate::shared::validation::FieldErrors;
use crate::tag::application::domain::entities::Tag;
use crate::tag::application::ports::{
    incoming::use_cases::{CreateTagCommand, CreateTagError, CreateTagUseCase},
    outgoing::{TagQuery, TagRepository, TagRepositoryError},
};

#[derive(Debug, Clone)]
pub struct CreateTagService<Q, R>
where
    Q: TagQuery + Send + Sync,
    R: TagRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> CreateTagService<Q, R>
where
    Q: TagQuery + Send + Sync,
    R: TagRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> CreateTagUseCase for CreateTagService<Q, R>
where
    Q: TagQuery + Send + Sync,
    R: TagRepository + Send + Sync,
{
    async fn execute(&self, command: CreateTagCommand) -> Result<Tag, CreateTagError> {
        let existing = self
            .query
            .find_by_name(command.name())
            .await
            .map_err(|e| CreateTagError::RepositoryError(e.to_string()))?;

        // Soft-deleted tags keep their name reserved
        if existing.is_some() {
            let mut errors = FieldErrors::new();
            errors.add("name", "This tag name is not available");
            return Err(CreateTagError::Validation(errors));
        }

        let tag = self
            .repository
            .create_tag(command.name())
            .await
            .map_err(|e| match e {
                TagRepositoryError::TagAlreadyExists => CreateTagError::TagAlreadyExists,
                other => CreateTagError::RepositoryError(other.to_string()),
            })?;

        info!(tag_id = %tag.id, name = %tag.name, "Tag created");
        Ok(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::tag::application::domain::entities::TagId;
    use crate::tag::application::ports::outgoing::TagQueryError;
    use crate::tests::support::fixtures::sample_tag;

    // ──────────────────────────────────────────────────────────
    // Mocks
    // ──────────────────────────────────────────────────────────

    #[derive(Clone)]
    struct MockTagQuery {
        existing: Option<Tag>,
    }

    #[async_trait]
    impl TagQuery for MockTagQuery {
        async fn find_by_id(&self, _tag_id: TagId) -> Result<Option<Tag>, TagQueryError> {
            unimplemented!()
        }

        async fn find_by_name(&self, _name: &str) -> Result<Option<Tag>, TagQueryError> {
            Ok(self.existing.clone())
        }

        async fn find_by_ids(&self, _ids: &[TagId]) -> Result<Vec<Tag>, TagQueryError> {
            unimplemented!()
        }

        async fn list_active_tags(&self) -> Result<Vec<Tag>, TagQueryError> {
            unimplemented!()
        }
    }

    #[derive(Clone)]
    struct MockTagRepository {
        result: Result<Tag, TagRepositoryError>,
    }

    #[async_trait]
    impl TagRepository for MockTagRepository {
        async fn create_tag(&self, _name: &str) -> Result<Tag, TagRepositoryError> {
            self.result.clone()
        }

        async fn soft_delete_tag(&self, _tag_id: TagId) -> Result<(), TagRepositoryError> {
            unimplemented!()
        }
    }

    fn service(
        existing: Option<Tag>,
        result: Result<Tag, TagRepositoryError>,
    ) -> CreateTagService<MockTagQuery, MockTagRepository> {
        CreateTagService::new(MockTagQuery { existing }, MockTagRepository { result })
    }

    // ──────────────────────────────────────────────────────────
    // Tests
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn creates_new_tag() {
        let service = service(None, Ok(sample_tag(1, "outdoors")));

        let tag = service
            .execute(CreateTagCommand::new("outdoors").unwrap())
            .await
            .unwrap();

        assert_eq!(tag.id, TagId::from(1));
        assert_eq!(tag.name, "outdoors");
    }

    #[tokio::test]
    async fn taken_name_is_validation_error() {
        let service = service(Some(sample_tag(1, "outdoors")), Ok(sample_tag(2, "outdoors")));

        let result = service
            .execute(CreateTagCommand::new("outdoors").unwrap())
            .await;

        match result {
            Err(CreateTagError::Validation(errors)) => assert_eq!(
                errors.get("name"),
                Some(&["This tag name is not available".to_string()][..])
            ),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn insert_race_is_already_exists() {
        let service = service(None, Err(TagRepositoryError::TagAlreadyExists));

        let result = service
            .execute(CreateTagCommand::new("outdoors").unwrap())
            .await;

        assert!(matches!(result, Err(CreateTagError::TagAlreadyExists)));
    }

    #[tokio::test]
    async fn database_error_is_repository_error() {
        let service = service(
            None,
            Err(TagRepositoryError::DatabaseError("connection lost".to_string())),
        );

        let result = service
            .execute(CreateTagCommand::new("outdoors").unwrap())
            .await;

        match result {
            Err(CreateTagError::RepositoryError(msg)) => assert!(msg.contains("connection lost")),
            other => panic!("expected RepositoryError, got {other:?}"),
        }
    }
}
