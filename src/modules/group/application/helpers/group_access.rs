use crate::group::application::domain::entities::{Group, GroupId};
use crate::group::application::ports::incoming::use_cases::{
    AddGroupMemberError, ChangeMemberRoleError, DeleteGroupError, RemoveGroupMemberError,
    RestoreGroupError, SetGroupTagsError, UpdateGroupError,
};
use crate::group::application::ports::outgoing::GroupQuery;
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GroupAccessError {
    #[error("Group not found")]
    GroupNotFound,

    #[error("Not permitted for this group")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Any group by id, soft-deleted or not.
pub async fn load_group<Q>(query: &Q, group_id: GroupId) -> Result<Group, GroupAccessError>
where
    Q: GroupQuery + ?Sized,
{
    query
        .find_by_id(group_id)
        .await
        .map_err(|e| GroupAccessError::RepositoryError(e.to_string()))?
        .ok_or(GroupAccessError::GroupNotFound)
}

/// A group that can still be joined, edited or referenced.
pub async fn active_group<Q>(query: &Q, group_id: GroupId) -> Result<Group, GroupAccessError>
where
    Q: GroupQuery + ?Sized,
{
    let group = load_group(query, group_id).await?;
    if group.is_deleted {
        return Err(GroupAccessError::GroupNotFound);
    }
    Ok(group)
}

/// Ownership gate for delete and restore; deleted groups qualify.
pub async fn require_owner<Q>(
    query: &Q,
    group_id: GroupId,
    actor: UserId,
) -> Result<Group, GroupAccessError>
where
    Q: GroupQuery + ?Sized,
{
    let group = load_group(query, group_id).await?;
    if group.owner_id != actor {
        return Err(GroupAccessError::Forbidden);
    }
    Ok(group)
}

/// Owner or admin of an active group.
pub async fn require_manager<Q>(
    query: &Q,
    group_id: GroupId,
    actor: UserId,
) -> Result<Group, GroupAccessError>
where
    Q: GroupQuery + ?Sized,
{
    let group = active_group(query, group_id).await?;
    if group.owner_id == actor {
        return Ok(group);
    }

    let membership = query
        .find_membership(group_id, actor)
        .await
        .map_err(|e| GroupAccessError::RepositoryError(e.to_string()))?;

    match membership {
        Some(member) if member.role.can_manage_members() => Ok(group),
        _ => Err(GroupAccessError::Forbidden),
    }
}

macro_rules! from_access_error {
    ($($target:ident),+ $(,)?) => {
        $(
            impl From<GroupAccessError> for $target {
                fn from(err: GroupAccessError) -> Self {
                    match err {
                        GroupAccessError::GroupNotFound => $target::GroupNotFound,
                        GroupAccessError::Forbidden => $target::Forbidden,
                        GroupAccessError::RepositoryError(msg) => $target::RepositoryError(msg),
                    }
                }
            }
        )+
    };
}

from_access_error!(
    AddGroupMemberError,
    ChangeMemberRoleError,
    DeleteGroupError,
    RemoveGroupMemberError,
    RestoreGroupError,
    SetGroupTagsError,
    UpdateGroupError,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::application::domain::entities::GroupRole;
    use crate::tests::support::fixtures::{sample_group, sample_member};
    use crate::tests::support::mocks::MockGroupQueryPort;

    fn query_with(group: Group) -> MockGroupQueryPort {
        let mut query = MockGroupQueryPort::new();
        query
            .expect_find_by_id()
            .returning(move |_| Ok(Some(group.clone())));
        query
    }

    #[tokio::test]
    async fn missing_group_is_not_found() {
        let mut query = MockGroupQueryPort::new();
        query.expect_find_by_id().returning(|_| Ok(None));

        let result = load_group(&query, GroupId::from(1)).await;
        assert!(matches!(result, Err(GroupAccessError::GroupNotFound)));
    }

    #[tokio::test]
    async fn deleted_group_is_not_active() {
        let mut group = sample_group(1, "Runners", 10);
        group.is_deleted = true;

        let result = active_group(&query_with(group), GroupId::from(1)).await;
        assert!(matches!(result, Err(GroupAccessError::GroupNotFound)));
    }

    #[tokio::test]
    async fn owner_check_accepts_deleted_groups() {
        let mut group = sample_group(1, "Runners", 10);
        group.is_deleted = true;
        let query = query_with(group);

        assert!(require_owner(&query, GroupId::from(1), UserId::from(10)).await.is_ok());
        assert!(matches!(
            require_owner(&query, GroupId::from(1), UserId::from(11)).await,
            Err(GroupAccessError::Forbidden)
        ));
    }

    #[tokio::test]
    async fn owner_manages_without_membership_lookup() {
        let query = query_with(sample_group(1, "Runners", 10));
        assert!(require_manager(&query, GroupId::from(1), UserId::from(10))
            .await
            .is_ok());
    }

    #[tokio::test]
    async fn admin_manages_member_does_not() {
        let mut query = query_with(sample_group(1, "Runners", 10));
        query
            .expect_find_membership()
            .returning(|group_id, user_id| {
                let role = if user_id.value() == 20 {
                    GroupRole::Admin
                } else {
                    GroupRole::Member
                };
                Ok(Some(sample_member(group_id.value(), user_id.value(), role)))
            });

        assert!(require_manager(&query, GroupId::from(1), UserId::from(20))
            .await
            .is_ok());
        assert!(matches!(
            require_manager(&query, GroupId::from(1), UserId::from(30)).await,
            Err(GroupAccessError::Forbidden)
        ));
    }

    #[tokio::test]
    async fn outsider_is_forbidden() {
        let mut query = query_with(sample_group(1, "Runners", 10));
        query.expect_find_membership().returning(|_, _| Ok(None));

        assert!(matches!(
            require_manager(&query, GroupId::from(1), UserId::from(99)).await,
            Err(GroupAccessError::Forbidden)
        ));
    }
}
