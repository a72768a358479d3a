use async_trait::async_trait;

use crate::tag::application::domain::entities::TagId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteTagError {
    #[error("Tag not found")]
    TagNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteTagUseCase: Send + Sync {
    async fn execute(&self, tag_id: TagId) -> Result<(), DeleteTagError>;
}
