use async_trait::async_trait;

use crate::group::application::domain::entities::{Group, GroupId, GroupMember};
use crate::tag::application::domain::entities::Tag;
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GroupQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait GroupQuery: Send + Sync {
    /// Returns soft-deleted groups too.
    async fn find_by_id(&self, group_id: GroupId) -> Result<Option<Group>, GroupQueryError>;

    async fn find_by_name(&self, name: &str) -> Result<Option<Group>, GroupQueryError>;

    async fn list_active_groups(&self) -> Result<Vec<Group>, GroupQueryError>;

    async fn list_members(&self, group_id: GroupId) -> Result<Vec<GroupMember>, GroupQueryError>;

    async fn find_membership(
        &self,
        group_id: GroupId,
        user_id: UserId,
    ) -> Result<Option<GroupMember>, GroupQueryError>;

    /// Active tags linked to the group.
    async fn list_group_tags(&self, group_id: GroupId) -> Result<Vec<Tag>, GroupQueryError>;
}
