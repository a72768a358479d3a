use async_trait::async_trait;
use tracing::info;

use crate::group::application::domain::entities::{Group, GroupId};
use crate::group::application::helpers::require_owner;
use crate::group::application::ports::{
    incoming::use_cases::{
        DeleteGroupError, DeleteGroupUseCase, RestoreGroupError, RestoreGroupUseCase,
    },
    outgoing::{GroupQuery, GroupRepository, GroupRepositoryError},
};
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct DeleteGroupService<Q, R>
where
    Q: GroupQuery + Send + Sync,
    R: GroupRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> DeleteGroupService<Q, R>
where
    Q: GroupQuery + Send + Sync,
    R: GroupRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> DeleteGroupUseCase for DeleteGroupService<Q, R>
where
    Q: GroupQuery + Send + Sync,
    R: GroupRepository + Send + Sync,
{
    async fn execute(&self, actor: UserId, group_id: GroupId) -> Result<(), DeleteGroupError> {
        require_owner(&self.query, group_id, actor).await?;

        self.repository
            .soft_delete_group(group_id)
            .await
            .map_err(|e| match e {
                GroupRepositoryError::GroupNotFound => DeleteGroupError::GroupNotFound,
                other => DeleteGroupError::RepositoryError(other.to_string()),
            })?;

        info!(group_id = %group_id, "Group soft-deleted");
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct RestoreGroupService<Q, R>
where
    Q: GroupQuery + Send + Sync,
    R: GroupRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> RestoreGroupService<Q, R>
where
    Q: GroupQuery + Send + Sync,
    R: GroupRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> RestoreGroupUseCase for RestoreGroupService<Q, R>
where
    Q: GroupQuery + Send + Sync,
    R: GroupRepository + Send + Sync,
{
    async fn execute(&self, actor: UserId, group_id: GroupId) -> Result<Group, RestoreGroupError> {
        let group = require_owner(&self.query, group_id, actor).await?;
        if !group.is_deleted {
            return Ok(group);
        }

        let restored = self
            .repository
            .restore_group(group_id)
            .await
            .map_err(|e| match e {
                GroupRepositoryError::GroupNotFound => RestoreGroupError::GroupNotFound,
                other => RestoreGroupError::RepositoryError(other.to_string()),
            })?;

        info!(group_id = %group_id, "Group restored");
        Ok(restored)
    }
}
