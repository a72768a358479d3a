use chrono::{DateTime, TimeZone, Utc};

use crate::event::application::domain::entities::{
    Attendee, Event, EventId, EventRole, Location, LocationId, DEFAULT_EVENT_DESCRIPTION,
};
use crate::group::application::domain::entities::{
    Group, GroupId, GroupMember, GroupRole, DEFAULT_GROUP_DESCRIPTION,
};
use crate::tag::application::domain::entities::{Tag, TagId};
use crate::user::application::domain::entities::{
    PasswordHash, User, UserCredentials, UserId, DEFAULT_BIO,
};

/// Location every `sample_event` points at.
pub const SAMPLE_LOCATION_ID: i32 = 3;

pub fn fixed_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 1, 9, 0, 0).unwrap()
}

pub fn sample_user(id: i32, username: &str, email: &str) -> User {
    User {
        id: UserId::from(id),
        username: username.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: email.to_string(),
        bio: DEFAULT_BIO.to_string(),
        is_deleted: false,
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

pub fn sample_credentials(id: i32, username: &str, is_deleted: bool) -> UserCredentials {
    UserCredentials {
        id: UserId::from(id),
        username: username.to_string(),
        password_hash: PasswordHash::new("$argon2id$stored-hash"),
        is_deleted,
    }
}

pub fn sample_tag(id: i32, name: &str) -> Tag {
    Tag {
        id: TagId::from(id),
        name: name.to_string(),
        is_deleted: false,
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

pub fn sample_group(id: i32, name: &str, owner_id: i32) -> Group {
    Group {
        id: GroupId::from(id),
        name: name.to_string(),
        description: DEFAULT_GROUP_DESCRIPTION.to_string(),
        owner_id: UserId::from(owner_id),
        is_deleted: false,
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

pub fn sample_member(group_id: i32, user_id: i32, role: GroupRole) -> GroupMember {
    GroupMember {
        group_id: GroupId::from(group_id),
        user_id: UserId::from(user_id),
        username: format!("user{user_id}"),
        role,
        joined_at: fixed_time(),
    }
}

pub fn sample_location(id: i32) -> Location {
    Location {
        id: LocationId::from(id),
        address: "742 Evergreen Terrace".to_string(),
        city: "Springfield".to_string(),
        state: "Oregon".to_string(),
        country: "USA".to_string(),
        latitude: Some(44.05),
        longitude: Some(-123.02),
        is_deleted: false,
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

pub fn sample_event(id: i32, title: &str, owner_id: i32) -> Event {
    let start = Utc.with_ymd_and_hms(2026, 11, 1, 7, 0, 0).unwrap();
    Event {
        id: EventId::from(id),
        title: title.to_string(),
        description: DEFAULT_EVENT_DESCRIPTION.to_string(),
        start_date: start,
        end_date: Some(start + chrono::Duration::hours(2)),
        mode: "in-person".to_string(),
        owner_id: UserId::from(owner_id),
        group_id: None,
        location_id: LocationId::from(SAMPLE_LOCATION_ID),
        is_deleted: false,
        created_at: fixed_time(),
        updated_at: fixed_time(),
    }
}

pub fn sample_attendee(event_id: i32, user_id: i32, role: EventRole) -> Attendee {
    Attendee {
        event_id: EventId::from(event_id),
        user_id: UserId::from(user_id),
        username: format!("user{user_id}"),
        role,
        joined_at: fixed_time(),
    }
}
