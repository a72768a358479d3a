mod add_group_member;
mod change_member_role;
mod create_group;
mod delete_group;
mod get_group;
mod join_group;
mod list_groups;
mod remove_group_member;
mod restore_group;
mod set_group_tags;
mod update_group;

pub use add_group_member::{AddGroupMemberCommand, AddGroupMemberError, AddGroupMemberUseCase};
pub use change_member_role::{
    ChangeMemberRoleCommand, ChangeMemberRoleError, ChangeMemberRoleUseCase,
};
pub use create_group::{
    CreateGroupCommand, CreateGroupError, CreateGroupForm, CreateGroupUseCase,
    MAX_GROUP_DESCRIPTION_LEN, MAX_GROUP_NAME_LEN,
};
pub use delete_group::{DeleteGroupError, DeleteGroupUseCase};
pub use get_group::{GetGroupError, GetGroupUseCase};
pub use join_group::{JoinGroupError, JoinGroupUseCase};
pub use list_groups::{ListGroupsError, ListGroupsUseCase};
pub use remove_group_member::{RemoveGroupMemberError, RemoveGroupMemberUseCase};
pub use restore_group::{RestoreGroupError, RestoreGroupUseCase};
pub use set_group_tags::{SetGroupTagsError, SetGroupTagsUseCase};
pub use update_group::{UpdateGroupCommand, UpdateGroupError, UpdateGroupUseCase};
