use async_trait::async_trait;

use crate::group::application::domain::entities::{Group, GroupId};
use crate::tag::application::domain::entities::TagId;
use crate::user::application::domain::entities::UserId;

#[derive(Debug, Clone)]
pub struct CreateGroupData {
    pub name: String,
    pub description: String,
    pub owner_id: UserId,
    pub tag_ids: Vec<TagId>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateGroupData {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum GroupRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Group not found")]
    GroupNotFound,

    #[error("Group already exists")]
    GroupAlreadyExists,

    #[error("Referenced owner, group or tag does not exist")]
    MissingReference,
}

#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// Inserts the group, its owner membership and its tag links atomically.
    async fn create_group(&self, data: CreateGroupData) -> Result<Group, GroupRepositoryError>;

    async fn update_group(
        &self,
        group_id: GroupId,
        data: UpdateGroupData,
    ) -> Result<Group, GroupRepositoryError>;

    async fn soft_delete_group(&self, group_id: GroupId) -> Result<(), GroupRepositoryError>;

    async fn restore_group(&self, group_id: GroupId) -> Result<Group, GroupRepositoryError>;

    /// Replaces the whole tag set of the group.
    async fn set_group_tags(
        &self,
        group_id: GroupId,
        tag_ids: &[TagId],
    ) -> Result<(), GroupRepositoryError>;
}
