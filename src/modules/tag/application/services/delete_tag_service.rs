use async_trait::async_trait;
use tracing::info;

use crate::tag::application::domain::entities::TagId;
use crate::tag::application::ports::{
    incoming::use_cases::{DeleteTagError, DeleteTagUseCase},
    outgoing::{TagRepository, TagRepositoryError},
};

#[derive(Debug, Clone)]
pub struct DeleteTagService<R>
where
    R: TagRepository + Send + Sync,
{
    repository: R,
}

impl<R> DeleteTagService<R>
where
    R: TagRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> DeleteTagUseCase for DeleteTagService<R>
where
    R: TagRepository + Send + Sync,
{
    async fn execute(&self, tag_id: TagId) -> Result<(), DeleteTagError> {
        self.repository
            .soft_delete_tag(tag_id)
            .await
            .map_err(|e| match e {
                TagRepositoryError::TagNotFound => DeleteTagError::TagNotFound,
                other => DeleteTagError::RepositoryError(other.to_string()),
            })?;

        info!(tag_id = %tag_id, "Tag soft-deleted");
        Ok(())
    }
}
