use async_trait::async_trait;

use crate::group::application::domain::entities::{Group, GroupDetails, GroupId};
use crate::group::application::helpers::{load_group, GroupAccessError};
use crate::group::application::ports::{
    incoming::use_cases::{GetGroupError, GetGroupUseCase, ListGroupsError, ListGroupsUseCase},
    outgoing::GroupQuery,
};

#[derive(Debug, Clone)]
pub struct GetGroupService<Q>
where
    Q: GroupQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetGroupService<Q>
where
    Q: GroupQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetGroupUseCase for GetGroupService<Q>
where
    Q: GroupQuery + Send + Sync,
{
    async fn execute(&self, group_id: GroupId) -> Result<GroupDetails, GetGroupError> {
        let group = load_group(&self.query, group_id)
            .await
            .map_err(|e| match e {
                GroupAccessError::RepositoryError(msg) => GetGroupError::RepositoryError(msg),
                _ => GetGroupError::GroupNotFound,
            })?;

        let members = self
            .query
            .list_members(group_id)
            .await
            .map_err(|e| GetGroupError::RepositoryError(e.to_string()))?;

        let tags = self
            .query
            .list_group_tags(group_id)
            .await
            .map_err(|e| GetGroupError::RepositoryError(e.to_string()))?;

        Ok(GroupDetails {
            group,
            members,
            tags,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ListGroupsService<Q>
where
    Q: GroupQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListGroupsService<Q>
where
    Q: GroupQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListGroupsUseCase for ListGroupsService<Q>
where
    Q: GroupQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Group>, ListGroupsError> {
        self.query
            .list_active_groups()
            .await
            .map_err(|e| ListGroupsError::QueryFailed(e.to_string()))
    }
}
