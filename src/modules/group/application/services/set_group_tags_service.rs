use async_trait::async_trait;
use tracing::info;

use crate::group::application::domain::entities::GroupId;
use crate::group::application::helpers::require_manager;
use crate::group::application::ports::{
    incoming::use_cases::{SetGroupTagsError, SetGroupTagsUseCase},
    outgoing::{GroupQuery, GroupRepository, GroupRepositoryError},
};
use crate::shared::validation::FieldErrors;
use crate::tag::application::domain::entities::Tag;
use crate::tag::application::helpers::TagResolver;
use crate::user::application::domain::entities::UserId;

#[derive(Clone)]
pub struct SetGroupTagsService<Q, R>
where
    Q: GroupQuery + Send + Sync,
    R: GroupRepository + Send + Sync,
{
    query: Q,
    repository: R,
    tags: TagResolver,
}

impl<Q, R> SetGroupTagsService<Q, R>
where
    Q: GroupQuery + Send + Sync,
    R: GroupRepository + Send + Sync,
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
impl<Q, R> SetGroupTagsUseCase for SetGroupTagsService<Q, R>
where
    Q: GroupQuery + Send + Sync,
    R: GroupRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: UserId,
        group_id: GroupId,
        tag_ids: Vec<i32>,
    ) -> Result<Vec<Tag>, SetGroupTagsError> {
        require_manager(&self.query, group_id, actor).await?;

        let mut errors = FieldErrors::new();
        let resolved = self
            .tags
            .resolve_active(&tag_ids, &mut errors)
            .await
            .map_err(|e| SetGroupTagsError::RepositoryError(e.to_string()))?;
        errors.into_result().map_err(SetGroupTagsError::Validation)?;

        self.repository
            .set_group_tags(group_id, &resolved)
            .await
            .map_err(|e| match e {
                GroupRepositoryError::GroupNotFound | GroupRepositoryError::MissingReference => {
                    SetGroupTagsError::GroupNotFound
                }
                other => SetGroupTagsError::RepositoryError(other.to_string()),
            })?;

        info!(group_id = %group_id, count = resolved.len(), "Group tags replaced");

        self.query
            .list_group_tags(group_id)
            .await
            .map_err(|e| SetGroupTagsError::RepositoryError(e.to_string()))
    }
}
