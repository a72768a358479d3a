use async_trait::async_trait;

use crate::group::application::domain::entities::GroupId;
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RemoveGroupMemberError {
    #[error("Group not found")]
    GroupNotFound,

    #[error("Not permitted to manage members of this group")]
    Forbidden,

    #[error("The group owner cannot be removed")]
    CannotRemoveOwner,

    #[error("Membership not found")]
    MembershipNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Members may remove themselves; removing anyone else takes owner or admin.
#[async_trait]
pub trait RemoveGroupMemberUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: UserId,
        group_id: GroupId,
        member_id: UserId,
    ) -> Result<(), RemoveGroupMemberError>;
}
