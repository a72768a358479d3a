use async_trait::async_trait;
use tracing::info;

use crate::group::application::domain::entities::{GroupId, GroupMember};
use crate::group::application::helpers::require_manager;
use crate::group::application::ports::{
    incoming::use_cases::{ChangeMemberRoleCommand, ChangeMemberRoleError, ChangeMemberRoleUseCase},
    outgoing::{GroupMemberRepository, GroupMemberRepositoryError, GroupQuery},
};
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct ChangeMemberRoleService<Q, M>
where
    Q: GroupQuery + Send + Sync,
    M: GroupMemberRepository + Send + Sync,
{
    query: Q,
    members: M,
}

impl<Q, M> ChangeMemberRoleService<Q, M>
where
    Q: GroupQuery + Send + Sync,
    M: GroupMemberRepository + Send + Sync,
{
    pub fn new(query: Q, members: M) -> Self {
        Self { query, members }
    }
}

#[async_trait]
impl<Q, M> ChangeMemberRoleUseCase for ChangeMemberRoleService<Q, M>
where
    Q: GroupQuery + Send + Sync,
    M: GroupMemberRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: UserId,
        group_id: GroupId,
        member_id: UserId,
        command: ChangeMemberRoleCommand,
    ) -> Result<GroupMember, ChangeMemberRoleError> {
        let group = require_manager(&self.query, group_id, actor).await?;

        if group.owner_id == member_id {
            return Err(ChangeMemberRoleError::CannotChangeOwner);
        }

        let member = self
            .members
            .change_role(group_id, member_id, command.role())
            .await
            .map_err(|e| match e {
                GroupMemberRepositoryError::MembershipNotFound => {
                    ChangeMemberRoleError::MembershipNotFound
                }
                other => ChangeMemberRoleError::RepositoryError(other.to_string()),
            })?;

        info!(
            group_id = %group_id,
            user_id = %member_id,
            role = member.role.as_str(),
            "Member role changed"
        );
        Ok(member)
    }
}
