//! Placeholder use cases for the `AppState` slots a route test does not exercise.

use async_trait::async_trait;

use crate::event::application::domain::entities::{Attendee, Event, EventDetails, EventId};
use crate::event::application::ports::incoming::use_cases::{
    AddAttendeeCommand, AddAttendeeError, AddAttendeeUseCase, CreateEventCommand,
    CreateEventError, CreateEventUseCase, DeleteEventError, DeleteEventUseCase, GetEventError,
    GetEventUseCase, ListEventsError, ListEventsUseCase, RemoveAttendeeError,
    RemoveAttendeeUseCase, RestoreEventError, RestoreEventUseCase, SetEventTagsError,
    SetEventTagsUseCase,
};
use crate::group::application::domain::entities::{Group, GroupDetails, GroupId, GroupMember};
use crate::group::application::ports::incoming::use_cases::{
    AddGroupMemberCommand, AddGroupMemberError, AddGroupMemberUseCase, ChangeMemberRoleCommand,
    ChangeMemberRoleError, ChangeMemberRoleUseCase, CreateGroupCommand, CreateGroupError,
    CreateGroupUseCase, DeleteGroupError, DeleteGroupUseCase, GetGroupError, GetGroupUseCase,
    JoinGroupError, JoinGroupUseCase, ListGroupsError, ListGroupsUseCase, RemoveGroupMemberError,
    RemoveGroupMemberUseCase, RestoreGroupError, RestoreGroupUseCase, SetGroupTagsError,
    SetGroupTagsUseCase, UpdateGroupCommand, UpdateGroupError, UpdateGroupUseCase,
};
use crate::tag::application::domain::entities::{Tag, TagId};
use crate::tag::application::ports::incoming::use_cases::{
    CreateTagCommand, CreateTagError, CreateTagUseCase, DeleteTagError, DeleteTagUseCase,
    ListTagsError, ListTagsUseCase,
};
use crate::user::application::domain::entities::{User, UserId};
use crate::user::application::ports::incoming::use_cases::{
    AuthSession, AuthenticateUserError, AuthenticateUserUseCase, ChangePasswordCommand,
    ChangePasswordError, ChangePasswordUseCase, DeleteUserError, DeleteUserUseCase, GetUserError,
    GetUserUseCase, ListUsersError, ListUsersUseCase, LoginCommand, SignUpCommand, SignUpError,
    SignUpUseCase, UpdateProfileCommand, UpdateProfileError, UpdateProfileUseCase,
};

#[derive(Default, Clone, Copy)]
pub struct Unused;

// Users

#[async_trait]
impl SignUpUseCase for Unused {
    async fn execute(&self, _command: SignUpCommand) -> Result<User, SignUpError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl AuthenticateUserUseCase for Unused {
    async fn execute(&self, _command: LoginCommand) -> Result<AuthSession, AuthenticateUserError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetUserUseCase for Unused {
    async fn execute(&self, _user_id: UserId) -> Result<User, GetUserError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ListUsersUseCase for Unused {
    async fn execute(&self) -> Result<Vec<User>, ListUsersError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateProfileUseCase for Unused {
    async fn execute(
        &self,
        _user_id: UserId,
        _command: UpdateProfileCommand,
    ) -> Result<User, UpdateProfileError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ChangePasswordUseCase for Unused {
    async fn execute(
        &self,
        _user_id: UserId,
        _command: ChangePasswordCommand,
    ) -> Result<(), ChangePasswordError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteUserUseCase for Unused {
    async fn execute(&self, _user_id: UserId) -> Result<(), DeleteUserError> {
        unimplemented!("Not used in this test")
    }
}

// Tags

#[async_trait]
impl CreateTagUseCase for Unused {
    async fn execute(&self, _command: CreateTagCommand) -> Result<Tag, CreateTagError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ListTagsUseCase for Unused {
    async fn execute(&self) -> Result<Vec<Tag>, ListTagsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteTagUseCase for Unused {
    async fn execute(&self, _tag_id: TagId) -> Result<(), DeleteTagError> {
        unimplemented!("Not used in this test")
    }
}

// Groups

#[async_trait]
impl CreateGroupUseCase for Unused {
    async fn execute(
        &self,
        _owner_id: UserId,
        _command: CreateGroupCommand,
    ) -> Result<Group, CreateGroupError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetGroupUseCase for Unused {
    async fn execute(&self, _group_id: GroupId) -> Result<GroupDetails, GetGroupError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ListGroupsUseCase for Unused {
    async fn execute(&self) -> Result<Vec<Group>, ListGroupsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl UpdateGroupUseCase for Unused {
    async fn execute(
        &self,
        _actor: UserId,
        _group_id: GroupId,
        _command: UpdateGroupCommand,
    ) -> Result<Group, UpdateGroupError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl JoinGroupUseCase for Unused {
    async fn execute(
        &self,
        _actor: UserId,
        _group_id: GroupId,
    ) -> Result<GroupMember, JoinGroupError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl AddGroupMemberUseCase for Unused {
    async fn execute(
        &self,
        _actor: UserId,
        _group_id: GroupId,
        _command: AddGroupMemberCommand,
    ) -> Result<GroupMember, AddGroupMemberError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl RemoveGroupMemberUseCase for Unused {
    async fn execute(
        &self,
        _actor: UserId,
        _group_id: GroupId,
        _member_id: UserId,
    ) -> Result<(), RemoveGroupMemberError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ChangeMemberRoleUseCase for Unused {
    async fn execute(
        &self,
        _actor: UserId,
        _group_id: GroupId,
        _member_id: UserId,
        _command: ChangeMemberRoleCommand,
    ) -> Result<GroupMember, ChangeMemberRoleError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl SetGroupTagsUseCase for Unused {
    async fn execute(
        &self,
        _actor: UserId,
        _group_id: GroupId,
        _tag_ids: Vec<i32>,
    ) -> Result<Vec<Tag>, SetGroupTagsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteGroupUseCase for Unused {
    async fn execute(&self, _actor: UserId, _group_id: GroupId) -> Result<(), DeleteGroupError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl RestoreGroupUseCase for Unused {
    async fn execute(
        &self,
        _actor: UserId,
        _group_id: GroupId,
    ) -> Result<Group, RestoreGroupError> {
        unimplemented!("Not used in this test")
    }
}

// Events

#[async_trait]
impl CreateEventUseCase for Unused {
    async fn execute(
        &self,
        _owner_id: UserId,
        _command: CreateEventCommand,
    ) -> Result<Event, CreateEventError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl GetEventUseCase for Unused {
    async fn execute(&self, _event_id: EventId) -> Result<EventDetails, GetEventError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl ListEventsUseCase for Unused {
    async fn execute(&self, _group_id: Option<GroupId>) -> Result<Vec<Event>, ListEventsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl AddAttendeeUseCase for Unused {
    async fn execute(
        &self,
        _actor: UserId,
        _event_id: EventId,
        _command: AddAttendeeCommand,
    ) -> Result<Attendee, AddAttendeeError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl RemoveAttendeeUseCase for Unused {
    async fn execute(
        &self,
        _actor: UserId,
        _event_id: EventId,
        _user_id: UserId,
    ) -> Result<(), RemoveAttendeeError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl SetEventTagsUseCase for Unused {
    async fn execute(
        &self,
        _actor: UserId,
        _event_id: EventId,
        _tag_ids: Vec<i32>,
    ) -> Result<Vec<Tag>, SetEventTagsError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl DeleteEventUseCase for Unused {
    async fn execute(&self, _actor: UserId, _event_id: EventId) -> Result<(), DeleteEventError> {
        unimplemented!("Not used in this test")
    }
}

#[async_trait]
impl RestoreEventUseCase for Unused {
    async fn execute(
        &self,
        _actor: UserId,
        _event_id: EventId,
    ) -> Result<Event, RestoreEventError> {
        unimplemented!("Not used in this test")
    }
}
