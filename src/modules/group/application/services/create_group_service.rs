use async_trait::async_trait;
use tracing::info;

use crate::group::application::domain::entities::Group;
use crate::group::application::ports::{
    incoming::use_cases::{CreateGroupCommand, CreateGroupError, CreateGroupUseCase},
    outgoing::{CreateGroupData, GroupQuery, GroupRepository, GroupRepositoryError},
};
use crate::shared::validation::FieldErrors;
use crate::tag::application::helpers::TagResolver;
use crate::user::application::domain::entities::UserId;

#[derive(Clone)]
pub struct CreateGroupService<Q, R>
where
    Q: GroupQuery + Send + Sync,
    R: GroupRepository + Send + Sync,
{
    query: Q,
    repository: R,
    tags: TagResolver,
}

impl<Q, R> CreateGroupService<Q, R>
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
impl<Q, R> CreateGroupUseCase for CreateGroupService<Q, R>
where
    Q: GroupQuery + Send + Sync,
    R: GroupRepository + Send + Sync,
{
    async fn execute(
        &self,
        owner_id: UserId,
        command: CreateGroupCommand,
    ) -> Result<Group, CreateGroupError> {
        let mut errors = FieldErrors::new();

        let name_taken = self
            .query
            .find_by_name(command.name())
            .await
            .map_err(|e| CreateGroupError::RepositoryError(e.to_string()))?
            .is_some();
        if name_taken {
            errors.add("name", "This group name is not available");
        }

        let tag_ids = self
            .tags
            .resolve_active(command.tags(), &mut errors)
            .await
            .map_err(|e| CreateGroupError::RepositoryError(e.to_string()))?;

        errors.into_result().map_err(CreateGroupError::Validation)?;

        let group = self
            .repository
            .create_group(CreateGroupData {
                name: command.name().to_string(),
                description: command.description().to_string(),
                owner_id,
                tag_ids,
            })
            .await
            .map_err(|e| match e {
                GroupRepositoryError::GroupAlreadyExists => CreateGroupError::GroupAlreadyExists,
                GroupRepositoryError::MissingReference => CreateGroupError::OwnerNotFound,
                other => CreateGroupError::RepositoryError(other.to_string()),
            })?;

        info!(group_id = %group.id, owner_id = %owner_id, "Group created");
        Ok(group)
    }
}
