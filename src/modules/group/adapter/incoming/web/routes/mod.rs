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

pub use add_group_member::{add_group_member_handler, AddGroupMemberRequest};
pub use change_member_role::{change_member_role_handler, ChangeMemberRoleRequest};
pub use create_group::{create_group_handler, CreateGroupRequest};
pub use delete_group::delete_group_handler;
pub use get_group::get_group_handler;
pub use join_group::join_group_handler;
pub use list_groups::list_groups_handler;
pub use remove_group_member::remove_group_member_handler;
pub use restore_group::restore_group_handler;
pub use set_group_tags::{set_group_tags_handler, SetGroupTagsRequest};
pub use update_group::{update_group_handler, UpdateGroupRequest};

pub use add_group_member::__path_add_group_member_handler;
pub use change_member_role::__path_change_member_role_handler;
pub use create_group::__path_create_group_handler;
pub use delete_group::__path_delete_group_handler;
pub use get_group::__path_get_group_handler;
pub use join_group::__path_join_group_handler;
pub use list_groups::__path_list_groups_handler;
pub use remove_group_member::__path_remove_group_member_handler;
pub use restore_group::__path_restore_group_handler;
pub use set_group_tags::__path_set_group_tags_handler;
pub use update_group::__path_update_group_handler;
