use async_trait::async_trait;
use tracing::info;

use crate::group::application::domain::entities::GroupId;
use crate::group::application::helpers::{active_group, require_manager};
use crate::group::application::ports::{
    incoming::use_cases::{RemoveGroupMemberError, RemoveGroupMemberUseCase},
    outgoing::{GroupMemberRepository, GroupMemberRepositoryError, GroupQuery},
};
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct RemoveGroupMemberService<Q, M>
where
    Q: GroupQuery + Send + Sync,
    M: GroupMemberRepository + Send + Sync,
{
    query: Q,
    members: M,
}

impl<Q, M> RemoveGroupMemberService<Q, M>
where
    Q: GroupQuery + Send + Sync,
    M: GroupMemberRepository + Send + Sync,
{
    pub fn new(query: Q, members: M) -> Self {
        Self { query, members }
    }
}

#[async_trait]
impl<Q, M> RemoveGroupMemberUseCase for RemoveGroupMemberService<Q, M>
where
    Q: GroupQuery + Send + Sync,
    M: GroupMemberRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: UserId,
        group_id: GroupId,
        member_id: UserId,
    ) -> Result<(), RemoveGroupMemberError> {
        // Members may always leave on their own
        let group = if actor == member_id {
            active_group(&self.query, group_id).await?
        } else {
            require_manager(&self.query, group_id, actor).await?
        };

        if group.owner_id == member_id {
            return Err(RemoveGroupMemberError::CannotRemoveOwner);
        }

        self.members
            .remove_member(group_id, member_id)
            .await
            .map_err(|e| match e {
                GroupMemberRepositoryError::MembershipNotFound => {
                    RemoveGroupMemberError::MembershipNotFound
                }
                other => RemoveGroupMemberError::RepositoryError(other.to_string()),
            })?;

        info!(
            group_id = %group_id,
            user_id = %member_id,
            actor = %actor,
            "Member removed from group"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::application::domain::entities::GroupRole;
    use crate::tests::support::fixtures::{sample_group, sample_member};
    use crate::tests::support::mocks::{MockGroupMemberRepositoryPort, MockGroupQueryPort};

    fn query() -> MockGroupQueryPort {
        let mut query = MockGroupQueryPort::new();
        query
            .expect_find_by_id()
            .returning(|_| Ok(Some(sample_group(1, "Runners", 10))));
        query
    }

    #[tokio::test]
    async fn member_can_leave() {
        let mut members = MockGroupMemberRepositoryPort::new();
        members
            .expect_remove_member()
            .withf(|g, u| *g == GroupId::from(1) && *u == UserId::from(12))
            .times(1)
            .returning(|_, _| Ok(()));

        let result = RemoveGroupMemberService::new(query(), members)
            .execute(UserId::from(12), GroupId::from(1), UserId::from(12))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn admin_removes_other_member() {
        let mut query = query();
        query
            .expect_find_membership()
            .returning(|g, u| Ok(Some(sample_member(g.value(), u.value(), GroupRole::Admin))));

        let mut members = MockGroupMemberRepositoryPort::new();
        members.expect_remove_member().returning(|_, _| Ok(()));

        let result = RemoveGroupMemberService::new(query, members)
            .execute(UserId::from(11), GroupId::from(1), UserId::from(12))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn member_cannot_remove_others() {
        let mut query = query();
        query
            .expect_find_membership()
            .returning(|g, u| Ok(Some(sample_member(g.value(), u.value(), GroupRole::Member))));

        let mut members = MockGroupMemberRepositoryPort::new();
        members.expect_remove_member().never();

        let result = RemoveGroupMemberService::new(query, members)
            .execute(UserId::from(12), GroupId::from(1), UserId::from(13))
            .await;

        assert!(matches!(result, Err(RemoveGroupMemberError::Forbidden)));
    }

    #[tokio::test]
    async fn owner_membership_is_permanent() {
        let mut members = MockGroupMemberRepositoryPort::new();
        members.expect_remove_member().never();

        let result = RemoveGroupMemberService::new(query(), members)
            .execute(UserId::from(10), GroupId::from(1), UserId::from(10))
            .await;

        assert!(matches!(result, Err(RemoveGroupMemberError::CannotRemoveOwner)));
    }

    #[tokio::test]
    async fn missing_membership_is_reported() {
        let mut members = MockGroupMemberRepositoryPort::new();
        members
            .expect_remove_member()
            .returning(|_, _| Err(GroupMemberRepositoryError::MembershipNotFound));

        let result = RemoveGroupMemberService::new(query(), members)
            .execute(UserId::from(10), GroupId::from(1), UserId::from(77))
            .await;

        assert!(matches!(result, Err(RemoveGroupMemberError::MembershipNotFound)));
    }
}
