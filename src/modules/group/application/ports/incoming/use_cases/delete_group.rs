use async_trait::async_trait;

use crate::group::application::domain::entities::GroupId;
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteGroupError {
    #[error("Group not found")]
    GroupNotFound,

    #[error("Only the owner can delete this group")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteGroupUseCase: Send + Sync {
    async fn execute(&self, actor: UserId, group_id: GroupId) -> Result<(), DeleteGroupError>;
}
