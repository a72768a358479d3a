use async_trait::async_trait;
use tracing::info;

use crate::group::application::domain::entities::{GroupId, GroupMember, GroupRole};
use crate::group::application::helpers::{active_group, GroupAccessError};
use crate::group::application::ports::{
    incoming::use_cases::{JoinGroupError, JoinGroupUseCase},
    outgoing::{GroupMemberRepository, GroupMemberRepositoryError, GroupQuery},
};
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct JoinGroupService<Q, M>
where
    Q: GroupQuery + Send + Sync,
    M: GroupMemberRepository + Send + Sync,
{
    query: Q,
    members: M,
}

impl<Q, M> JoinGroupService<Q, M>
where
    Q: GroupQuery + Send + Sync,
    M: GroupMemberRepository + Send + Sync,
{
    pub fn new(query: Q, members: M) -> Self {
        Self { query, members }
    }
}

#[async_trait]
impl<Q, M> JoinGroupUseCase for JoinGroupService<Q, M>
where
    Q: GroupQuery + Send + Sync,
    M: GroupMemberRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: UserId,
        group_id: GroupId,
    ) -> Result<GroupMember, JoinGroupError> {
        active_group(&self.query, group_id)
            .await
            .map_err(|e| match e {
                GroupAccessError::RepositoryError(msg) => JoinGroupError::RepositoryError(msg),
                _ => JoinGroupError::GroupNotFound,
            })?;

        let member = self
            .members
            .add_member(group_id, actor, GroupRole::Member)
            .await
            .map_err(|e| match e {
                GroupMemberRepositoryError::AlreadyMember => JoinGroupError::AlreadyMember,
                GroupMemberRepositoryError::MissingReference => JoinGroupError::GroupNotFound,
                other => JoinGroupError::RepositoryError(other.to_string()),
            })?;

        info!(group_id = %group_id, user_id = %actor, "User joined group");
        Ok(member)
    }
}
