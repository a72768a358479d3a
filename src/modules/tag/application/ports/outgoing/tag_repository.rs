use async_trait::async_trait;

use crate::tag::application::domain::entities::{Tag, TagId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum TagRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Tag not found")]
    TagNotFound,

    #[error("Tag already exists")]
    TagAlreadyExists,
}

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn create_tag(&self, name: &str) -> Result<Tag, TagRepositoryError>;

    /// Flags the tag as deleted. Deleting an already deleted tag is a no-op.
    async fn soft_delete_tag(&self, tag_id: TagId) -> Result<(), TagRepositoryError>;
}
