mod add_group_member_service;
mod change_member_role_service;
mod create_group_service;
mod delete_group_service;
mod get_group_service;
mod join_group_service;
mod remove_group_member_service;
mod set_group_tags_service;
mod update_group_service;

pub use add_group_member_service::AddGroupMemberService;
pub use change_member_role_service::ChangeMemberRoleService;
pub use create_group_service::CreateGroupService;
pub use delete_group_service::{DeleteGroupService, RestoreGroupService};
pub use get_group_service::{GetGroupService, ListGroupsService};
pub use join_group_service::JoinGroupService;
pub use remove_group_member_service::RemoveGroupMemberService;
pub use set_group_tags_service::SetGroupTagsService;
pub use update_group_service::UpdateGroupService;
