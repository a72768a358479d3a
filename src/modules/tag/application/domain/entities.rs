use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

crate::entity_id!(TagId);

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
