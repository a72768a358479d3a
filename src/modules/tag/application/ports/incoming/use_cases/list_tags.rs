use async_trait::async_trait;

use crate::tag::application::domain::entities::Tag;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListTagsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListTagsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Tag>, ListTagsError>;
}
