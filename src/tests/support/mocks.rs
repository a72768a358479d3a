//! mockall doubles for every outgoing port.

use async_trait::async_trait;
use mockall::mock;

use crate::event::application::domain::entities::{
    Attendee, Event, EventId, EventRole, Location, LocationId,
};
use crate::event::application::ports::outgoing::{
    CreateEventData, EventAttendeeRepository, EventAttendeeRepositoryError, EventQuery,
    EventQueryError, EventRepository, EventRepositoryError,
};
use crate::group::application::domain::entities::{Group, GroupId, GroupMember, GroupRole};
use crate::group::application::ports::outgoing::{
    CreateGroupData, GroupMemberRepository, GroupMemberRepositoryError, GroupQuery,
    GroupQueryError, GroupRepository, GroupRepositoryError, UpdateGroupData,
};
use crate::tag::application::domain::entities::{Tag, TagId};
use crate::tag::application::ports::outgoing::{TagQuery, TagQueryError};
use crate::user::application::domain::entities::{User, UserCredentials, UserId};
use crate::user::application::ports::outgoing::{
    CreateUserData, HashError, IssuedToken, PasswordHasher, TokenClaims, TokenError,
    TokenProvider, UpdateProfileData, UserQuery, UserQueryError, UserRepository,
    UserRepositoryError,
};

mock! {
    pub UserQueryPort {}
    #[async_trait]
    impl UserQuery for UserQueryPort {
        async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError>;
        async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError>;
        async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError>;
        async fn find_credentials(
            &self,
            username: &str,
        ) -> Result<Option<UserCredentials>, UserQueryError>;
        async fn find_credentials_by_id(
            &self,
            user_id: UserId,
        ) -> Result<Option<UserCredentials>, UserQueryError>;
        async fn list_active_users(&self) -> Result<Vec<User>, UserQueryError>;
    }
}

mock! {
    pub UserRepositoryPort {}
    #[async_trait]
    impl UserRepository for UserRepositoryPort {
        async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError>;
        async fn update_profile(
            &self,
            user_id: UserId,
            data: UpdateProfileData,
        ) -> Result<User, UserRepositoryError>;
        async fn set_password_hash(
            &self,
            user_id: UserId,
            password_hash: String,
        ) -> Result<(), UserRepositoryError>;
        async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError>;
    }
}

mock! {
    pub PasswordHasherPort {}
    #[async_trait]
    impl PasswordHasher for PasswordHasherPort {
        async fn hash_password(&self, password: &str) -> Result<String, HashError>;
        async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
    }
}

mock! {
    pub TokenProviderPort {}
    impl TokenProvider for TokenProviderPort {
        fn issue_token(&self, user_id: UserId) -> Result<IssuedToken, TokenError>;
        fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
    }
}

mock! {
    pub TagQueryPort {}
    #[async_trait]
    impl TagQuery for TagQueryPort {
        async fn find_by_id(&self, tag_id: TagId) -> Result<Option<Tag>, TagQueryError>;
        async fn find_by_name(&self, name: &str) -> Result<Option<Tag>, TagQueryError>;
        async fn find_by_ids(&self, ids: &[TagId]) -> Result<Vec<Tag>, TagQueryError>;
        async fn list_active_tags(&self) -> Result<Vec<Tag>, TagQueryError>;
    }
}

mock! {
    pub GroupQueryPort {}
    #[async_trait]
    impl GroupQuery for GroupQueryPort {
        async fn find_by_id(&self, group_id: GroupId) -> Result<Option<Group>, GroupQueryError>;
        async fn find_by_name(&self, name: &str) -> Result<Option<Group>, GroupQueryError>;
        async fn list_active_groups(&self) -> Result<Vec<Group>, GroupQueryError>;
        async fn list_members(
            &self,
            group_id: GroupId,
        ) -> Result<Vec<GroupMember>, GroupQueryError>;
        async fn find_membership(
            &self,
            group_id: GroupId,
            user_id: UserId,
        ) -> Result<Option<GroupMember>, GroupQueryError>;
        async fn list_group_tags(&self, group_id: GroupId) -> Result<Vec<Tag>, GroupQueryError>;
    }
}

mock! {
    pub GroupRepositoryPort {}
    #[async_trait]
    impl GroupRepository for GroupRepositoryPort {
        async fn create_group(&self, data: CreateGroupData) -> Result<Group, GroupRepositoryError>;
        async fn update_group(
            &self,
            group_id: GroupId,
            data: UpdateGroupData,
        ) -> Result<Group, GroupRepositoryError>;
        async fn soft_delete_group(&self, group_id: GroupId) -> Result<(), GroupRepositoryError>;
        async fn restore_group(&self, group_id: GroupId) -> Result<Group, GroupRepositoryError>;
        async fn set_group_tags(
            &self,
            group_id: GroupId,
            tag_ids: &[TagId],
        ) -> Result<(), GroupRepositoryError>;
    }
}

mock! {
    pub GroupMemberRepositoryPort {}
    #[async_trait]
    impl GroupMemberRepository for GroupMemberRepositoryPort {
        async fn add_member(
            &self,
            group_id: GroupId,
            user_id: UserId,
            role: GroupRole,
        ) -> Result<GroupMember, GroupMemberRepositoryError>;
        async fn remove_member(
            &self,
            group_id: GroupId,
            user_id: UserId,
        ) -> Result<(), GroupMemberRepositoryError>;
        async fn change_role(
            &self,
            group_id: GroupId,
            user_id: UserId,
            role: GroupRole,
        ) -> Result<GroupMember, GroupMemberRepositoryError>;
    }
}

mock! {
    pub EventQueryPort {}
    #[async_trait]
    impl EventQuery for EventQueryPort {
        async fn find_by_id(&self, event_id: EventId) -> Result<Option<Event>, EventQueryError>;
        async fn list_active_events(&self) -> Result<Vec<Event>, EventQueryError>;
        async fn list_group_events(
            &self,
            group_id: GroupId,
        ) -> Result<Vec<Event>, EventQueryError>;
        async fn list_attendees(&self, event_id: EventId) -> Result<Vec<Attendee>, EventQueryError>;
        async fn find_attendance(
            &self,
            event_id: EventId,
            user_id: UserId,
        ) -> Result<Option<Attendee>, EventQueryError>;
        async fn list_event_tags(&self, event_id: EventId) -> Result<Vec<Tag>, EventQueryError>;
        async fn find_location(
            &self,
            location_id: LocationId,
        ) -> Result<Option<Location>, EventQueryError>;
    }
}

mock! {
    pub EventRepositoryPort {}
    #[async_trait]
    impl EventRepository for EventRepositoryPort {
        async fn create_event(&self, data: CreateEventData) -> Result<Event, EventRepositoryError>;
        async fn soft_delete_event(&self, event_id: EventId) -> Result<(), EventRepositoryError>;
        async fn restore_event(&self, event_id: EventId) -> Result<Event, EventRepositoryError>;
        async fn set_event_tags(
            &self,
            event_id: EventId,
            tag_ids: &[TagId],
        ) -> Result<(), EventRepositoryError>;
    }
}

mock! {
    pub EventAttendeeRepositoryPort {}
    #[async_trait]
    impl EventAttendeeRepository for EventAttendeeRepositoryPort {
        async fn add_attendee(
            &self,
            event_id: EventId,
            user_id: UserId,
            role: EventRole,
        ) -> Result<Attendee, EventAttendeeRepositoryError>;
        async fn remove_attendee(
            &self,
            event_id: EventId,
            user_id: UserId,
        ) -> Result<(), EventAttendeeRepositoryError>;
    }
}
