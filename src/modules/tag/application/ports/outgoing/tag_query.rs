use async_trait::async_trait;

use crate::tag::application::domain::entities::{Tag, TagId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum TagQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TagQuery: Send + Sync {
    async fn find_by_id(&self, tag_id: TagId) -> Result<Option<Tag>, TagQueryError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Tag>, TagQueryError>;

    /// Tags among `ids` that exist, deleted or not.
    async fn find_by_ids(&self, ids: &[TagId]) -> Result<Vec<Tag>, TagQueryError>;

    async fn list_active_tags(&self) -> Result<Vec<Tag>, TagQueryError>;
}
