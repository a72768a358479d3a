use async_trait::async_trait;

use crate::group::application::domain::entities::{GroupId, GroupMember};
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum JoinGroupError {
    #[error("Group not found")]
    GroupNotFound,

    #[error("Already a member of this group")]
    AlreadyMember,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait JoinGroupUseCase: Send + Sync {
    async fn execute(&self, actor: UserId, group_id: GroupId)
        -> Result<GroupMember, JoinGroupError>;
}
