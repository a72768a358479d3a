use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::tag::application::domain::entities::Tag;
use crate::user::application::domain::entities::UserId;

pub const DEFAULT_GROUP_DESCRIPTION: &str = "No description";

crate::entity_id!(GroupId);

/// Role held inside a group, stored as its lowercase name.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Serialize,
    Deserialize,
    ToSchema,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "lowercase")]
pub enum GroupRole {
    #[sea_orm(string_value = "owner")]
    Owner,
    #[sea_orm(string_value = "admin")]
    Admin,
    #[default]
    #[sea_orm(string_value = "member")]
    Member,
}

impl GroupRole {
    pub fn can_manage_members(self) -> bool {
        matches!(self, GroupRole::Owner | GroupRole::Admin)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GroupRole::Owner => "owner",
            GroupRole::Admin => "admin",
            GroupRole::Member => "member",
        }
    }

    /// Roles that can be handed out; ownership only comes with creation.
    pub fn parse_assignable(value: &str) -> Option<Self> {
        match value.trim() {
            "admin" => Some(GroupRole::Admin),
            "member" => Some(GroupRole::Member),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Group {
    pub id: GroupId,
    pub name: String,
    pub description: String,
    pub owner_id: UserId,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct GroupMember {
    pub group_id: GroupId,
    pub user_id: UserId,
    pub username: String,
    pub role: GroupRole,
    pub joined_at: DateTime<Utc>,
}

/// A group with its roster and active tags.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GroupDetails {
    #[serde(flatten)]
    pub group: Group,
    pub members: Vec<GroupMember>,
    pub tags: Vec<Tag>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_owner_and_admin_manage_members() {
        assert!(GroupRole::Owner.can_manage_members());
        assert!(GroupRole::Admin.can_manage_members());
        assert!(!GroupRole::Member.can_manage_members());
    }

    #[test]
    fn owner_is_not_assignable() {
        assert_eq!(GroupRole::parse_assignable("admin"), Some(GroupRole::Admin));
        assert_eq!(GroupRole::parse_assignable(" member "), Some(GroupRole::Member));
        assert_eq!(GroupRole::parse_assignable("owner"), None);
        assert_eq!(GroupRole::parse_assignable("Admin"), None);
    }

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&GroupRole::Admin).unwrap(), "\"admin\"");
        assert_eq!(GroupRole::default(), GroupRole::Member);
    }
}
