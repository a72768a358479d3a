use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::group::application::domain::entities::GroupId;
use crate::tag::application::domain::entities::Tag;
use crate::user::application::domain::entities::UserId;

pub const DEFAULT_EVENT_DESCRIPTION: &str = "No description";

crate::entity_id!(EventId);
crate::entity_id!(LocationId);

/// Role held by an attendee, stored as its lowercase name.
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
pub enum EventRole {
    #[sea_orm(string_value = "organizer")]
    Organizer,
    #[sea_orm(string_value = "speaker")]
    Speaker,
    #[default]
    #[sea_orm(string_value = "participant")]
    Participant,
}

impl EventRole {
    pub fn can_manage_event(&self) -> bool {
        matches!(self, EventRole::Organizer)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventRole::Organizer => "organizer",
            EventRole::Speaker => "speaker",
            EventRole::Participant => "participant",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "organizer" => Some(EventRole::Organizer),
            "speaker" => Some(EventRole::Speaker),
            "participant" => Some(EventRole::Participant),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Location {
    pub id: LocationId,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub mode: String,
    pub owner_id: UserId,
    pub group_id: Option<GroupId>,
    pub location_id: LocationId,
    pub is_deleted: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Attendee {
    pub event_id: EventId,
    pub user_id: UserId,
    pub username: String,
    pub role: EventRole,
    pub joined_at: DateTime<Utc>,
}

/// An event with its venue, roster and active tags.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EventDetails {
    #[serde(flatten)]
    pub event: Event,
    pub location: Location,
    pub attendees: Vec<Attendee>,
    pub tags: Vec<Tag>,
}
