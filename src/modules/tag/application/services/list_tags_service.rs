use async_trait::async_trait;

use crate::tag::application::domain::entities::Tag;
use crate::tag::application::ports::{
    incoming::use_cases::{ListTagsError, ListTagsUseCase},
    outgoing::TagQuery,
};

#[derive(Debug, Clone)]
pub struct ListTagsService<Q>
where
    Q: TagQuery + Send + Sync,
{
    query: Q,
}

impl<Q> ListTagsService<Q>
where
    Q: TagQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> ListTagsUseCase for ListTagsService<Q>
where
    Q: TagQuery + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Tag>, ListTagsError> {
        self.query
            .list_active_tags()
            .await
            .map_err(|e| ListTagsError::QueryFailed(e.to_string()))
    }
}
