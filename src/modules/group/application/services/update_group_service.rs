use async_trait::async_trait;
use tracing::info;

use crate::group::application::domain::entities::{Group, GroupId};
use crate::group::application::helpers::require_manager;
use crate::group::application::ports::{
    incoming::use_cases::{UpdateGroupCommand, UpdateGroupError, UpdateGroupUseCase},
    outgoing::{GroupQuery, GroupRepository, GroupRepositoryError, UpdateGroupData},
};
use crate::shared::validation::FieldErrors;
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct UpdateGroupService<Q, R>
where
    Q: GroupQuery + Send + Sync,
    R: GroupRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> UpdateGroupService<Q, R>
where
    Q: GroupQuery + Send + Sync,
    R: GroupRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> UpdateGroupUseCase for UpdateGroupService<Q, R>
where
    Q: GroupQuery + Send + Sync,
    R: GroupRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: UserId,
        group_id: GroupId,
        command: UpdateGroupCommand,
    ) -> Result<Group, UpdateGroupError> {
        let group = require_manager(&self.query, group_id, actor).await?;

        if let Some(name) = command.name().filter(|name| *name != group.name) {
            let holder = self
                .query
                .find_by_name(name)
                .await
                .map_err(|e| UpdateGroupError::RepositoryError(e.to_string()))?;

            if holder.is_some_and(|other| other.id != group_id) {
                let mut errors = FieldErrors::new();
                errors.add("name", "This group name is not available");
                return Err(UpdateGroupError::Validation(errors));
            }
        }

        let data = UpdateGroupData {
            name: command.name().map(str::to_string),
            description: command.description().map(str::to_string),
        };

        let updated = self
            .repository
            .update_group(group_id, data)
            .await
            .map_err(|e| match e {
                GroupRepositoryError::GroupNotFound => UpdateGroupError::GroupNotFound,
                GroupRepositoryError::GroupAlreadyExists => UpdateGroupError::GroupAlreadyExists,
                other => UpdateGroupError::RepositoryError(other.to_string()),
            })?;

        info!(group_id = %group_id, actor = %actor, "Group updated");
        Ok(updated)
    }
}
