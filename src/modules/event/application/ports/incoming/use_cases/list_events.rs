use async_trait::async_trait;

use crate::event::application::domain::entities::Event;
use crate::group::application::domain::entities::GroupId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListEventsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait ListEventsUseCase: Send + Sync {
    /// Active events, optionally narrowed to one group.
    async fn execute(&self, group_id: Option<GroupId>) -> Result<Vec<Event>, ListEventsError>;
}
