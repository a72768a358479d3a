use async_trait::async_trait;

use crate::group::application::domain::entities::{GroupDetails, GroupId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetGroupError {
    #[error("Group not found")]
    GroupNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetGroupUseCase: Send + Sync {
    async fn execute(&self, group_id: GroupId) -> Result<GroupDetails, GetGroupError>;
}
