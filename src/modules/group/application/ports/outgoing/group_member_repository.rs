use async_trait::async_trait;

use crate::group::application::domain::entities::{GroupId, GroupMember, GroupRole};
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GroupMemberRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("User is already a member of this group")]
    AlreadyMember,

    #[error("Membership not found")]
    MembershipNotFound,

    #[error("Group or user does not exist")]
    MissingReference,
}

#[async_trait]
pub trait GroupMemberRepository: Send + Sync {
    async fn add_member(
        &self,
        group_id: GroupId,
        user_id: UserId,
        role: GroupRole,
    ) -> Result<GroupMember, GroupMemberRepositoryError>;

    async fn remove_member(
        &self,
        group_id: GroupId,
        user_id: UserId,
    ) -> Result<(), GroupMemberRepositoryError>;

    async fn change_role(
        &self,
        group_id: GroupId,
        user_id: UserId,
        role: GroupRole,
    ) -> Result<GroupMember, GroupMemberRepositoryError>;
}
