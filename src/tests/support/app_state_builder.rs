use std::sync::Arc;

use actix_web::web;

use crate::event::application::ports::incoming::use_cases::{
    AddAttendeeUseCase, CreateEventUseCase, DeleteEventUseCase, GetEventUseCase,
    ListEventsUseCase, RemoveAttendeeUseCase, RestoreEventUseCase, SetEventTagsUseCase,
};
use crate::event::application::EventUseCases;
use crate::group::application::ports::incoming::use_cases::{
    AddGroupMemberUseCase, ChangeMemberRoleUseCase, CreateGroupUseCase, DeleteGroupUseCase,
    GetGroupUseCase, JoinGroupUseCase, ListGroupsUseCase, RemoveGroupMemberUseCase,
    RestoreGroupUseCase, SetGroupTagsUseCase, UpdateGroupUseCase,
};
use crate::group::application::GroupUseCases;
use crate::tag::application::ports::incoming::use_cases::{
    CreateTagUseCase, DeleteTagUseCase, ListTagsUseCase,
};
use crate::tag::application::TagUseCases;
use crate::tests::support::stubs::Unused;
use crate::user::application::ports::incoming::use_cases::{
    AuthenticateUserUseCase, ChangePasswordUseCase, DeleteUserUseCase, GetUserUseCase,
    ListUsersUseCase, SignUpUseCase, UpdateProfileUseCase,
};
use crate::user::application::UserUseCases;
use crate::AppState;

/// Builds an `AppState` whose every slot panics unless a test overrides it.
pub struct TestAppStateBuilder {
    user: UserUseCases,
    tag: TagUseCases,
    group: GroupUseCases,
    event: EventUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            user: UserUseCases {
                sign_up: Arc::new(Unused),
                authenticate: Arc::new(Unused),
                get: Arc::new(Unused),
                list: Arc::new(Unused),
                update_profile: Arc::new(Unused),
                change_password: Arc::new(Unused),
                delete: Arc::new(Unused),
            },
            tag: TagUseCases {
                create: Arc::new(Unused),
                list: Arc::new(Unused),
                delete: Arc::new(Unused),
            },
            group: GroupUseCases {
                create: Arc::new(Unused),
                get: Arc::new(Unused),
                list: Arc::new(Unused),
                update: Arc::new(Unused),
                join: Arc::new(Unused),
                add_member: Arc::new(Unused),
                remove_member: Arc::new(Unused),
                change_member_role: Arc::new(Unused),
                set_tags: Arc::new(Unused),
                delete: Arc::new(Unused),
                restore: Arc::new(Unused),
            },
            event: EventUseCases {
                create: Arc::new(Unused),
                get: Arc::new(Unused),
                list: Arc::new(Unused),
                add_attendee: Arc::new(Unused),
                remove_attendee: Arc::new(Unused),
                set_tags: Arc::new(Unused),
                delete: Arc::new(Unused),
                restore: Arc::new(Unused),
            },
        }
    }
}

impl TestAppStateBuilder {
    // Users

    pub fn with_sign_up(mut self, uc: impl SignUpUseCase + Send + Sync + 'static) -> Self {
        self.user.sign_up = Arc::new(uc);
        self
    }

    pub fn with_authenticate(
        mut self,
        uc: impl AuthenticateUserUseCase + Send + Sync + 'static,
    ) -> Self {
        self.user.authenticate = Arc::new(uc);
        self
    }

    pub fn with_get_user(mut self, uc: impl GetUserUseCase + Send + Sync + 'static) -> Self {
        self.user.get = Arc::new(uc);
        self
    }

    pub fn with_list_users(mut self, uc: impl ListUsersUseCase + Send + Sync + 'static) -> Self {
        self.user.list = Arc::new(uc);
        self
    }

    pub fn with_update_profile(
        mut self,
        uc: impl UpdateProfileUseCase + Send + Sync + 'static,
    ) -> Self {
        self.user.update_profile = Arc::new(uc);
        self
    }

    pub fn with_change_password(
        mut self,
        uc: impl ChangePasswordUseCase + Send + Sync + 'static,
    ) -> Self {
        self.user.change_password = Arc::new(uc);
        self
    }

    pub fn with_delete_user(mut self, uc: impl DeleteUserUseCase + Send + Sync + 'static) -> Self {
        self.user.delete = Arc::new(uc);
        self
    }

    // Tags

    pub fn with_create_tag(mut self, uc: impl CreateTagUseCase + Send + Sync + 'static) -> Self {
        self.tag.create = Arc::new(uc);
        self
    }

    pub fn with_list_tags(mut self, uc: impl ListTagsUseCase + Send + Sync + 'static) -> Self {
        self.tag.list = Arc::new(uc);
        self
    }

    pub fn with_delete_tag(mut self, uc: impl DeleteTagUseCase + Send + Sync + 'static) -> Self {
        self.tag.delete = Arc::new(uc);
        self
    }

    // Groups

    pub fn with_create_group(
        mut self,
        uc: impl CreateGroupUseCase + Send + Sync + 'static,
    ) -> Self {
        self.group.create = Arc::new(uc);
        self
    }

    pub fn with_get_group(mut self, uc: impl GetGroupUseCase + Send + Sync + 'static) -> Self {
        self.group.get = Arc::new(uc);
        self
    }

    pub fn with_list_groups(mut self, uc: impl ListGroupsUseCase + Send + Sync + 'static) -> Self {
        self.group.list = Arc::new(uc);
        self
    }

    pub fn with_update_group(
        mut self,
        uc: impl UpdateGroupUseCase + Send + Sync + 'static,
    ) -> Self {
        self.group.update = Arc::new(uc);
        self
    }

    pub fn with_join_group(mut self, uc: impl JoinGroupUseCase + Send + Sync + 'static) -> Self {
        self.group.join = Arc::new(uc);
        self
    }

    pub fn with_add_group_member(
        mut self,
        uc: impl AddGroupMemberUseCase + Send + Sync + 'static,
    ) -> Self {
        self.group.add_member = Arc::new(uc);
        self
    }

    pub fn with_remove_group_member(
        mut self,
        uc: impl RemoveGroupMemberUseCase + Send + Sync + 'static,
    ) -> Self {
        self.group.remove_member = Arc::new(uc);
        self
    }

    pub fn with_change_member_role(
        mut self,
        uc: impl ChangeMemberRoleUseCase + Send + Sync + 'static,
    ) -> Self {
        self.group.change_member_role = Arc::new(uc);
        self
    }

    pub fn with_set_group_tags(
        mut self,
        uc: impl SetGroupTagsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.group.set_tags = Arc::new(uc);
        self
    }

    pub fn with_delete_group(
        mut self,
        uc: impl DeleteGroupUseCase + Send + Sync + 'static,
    ) -> Self {
        self.group.delete = Arc::new(uc);
        self
    }

    pub fn with_restore_group(
        mut self,
        uc: impl RestoreGroupUseCase + Send + Sync + 'static,
    ) -> Self {
        self.group.restore = Arc::new(uc);
        self
    }

    // Events

    pub fn with_create_event(
        mut self,
        uc: impl CreateEventUseCase + Send + Sync + 'static,
    ) -> Self {
        self.event.create = Arc::new(uc);
        self
    }

    pub fn with_get_event(mut self, uc: impl GetEventUseCase + Send + Sync + 'static) -> Self {
        self.event.get = Arc::new(uc);
        self
    }

    pub fn with_list_events(mut self, uc: impl ListEventsUseCase + Send + Sync + 'static) -> Self {
        self.event.list = Arc::new(uc);
        self
    }

    pub fn with_add_attendee(
        mut self,
        uc: impl AddAttendeeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.event.add_attendee = Arc::new(uc);
        self
    }

    pub fn with_remove_attendee(
        mut self,
        uc: impl RemoveAttendeeUseCase + Send + Sync + 'static,
    ) -> Self {
        self.event.remove_attendee = Arc::new(uc);
        self
    }

    pub fn with_set_event_tags(
        mut self,
        uc: impl SetEventTagsUseCase + Send + Sync + 'static,
    ) -> Self {
        self.event.set_tags = Arc::new(uc);
        self
    }

    pub fn with_delete_event(
        mut self,
        uc: impl DeleteEventUseCase + Send + Sync + 'static,
    ) -> Self {
        self.event.delete = Arc::new(uc);
        self
    }

    pub fn with_restore_event(
        mut self,
        uc: impl RestoreEventUseCase + Send + Sync + 'static,
    ) -> Self {
        self.event.restore = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            user: self.user,
            group: self.group,
            event: self.event,
            tag: self.tag,
        })
    }
}
