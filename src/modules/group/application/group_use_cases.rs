use std::sync::Arc;

use crate::group::application::ports::incoming::use_cases::{
    AddGroupMemberUseCase, ChangeMemberRoleUseCase, CreateGroupUseCase, DeleteGroupUseCase,
    GetGroupUseCase, JoinGroupUseCase, ListGroupsUseCase, RemoveGroupMemberUseCase,
    RestoreGroupUseCase, SetGroupTagsUseCase, UpdateGroupUseCase,
};

#[derive(Clone)]
pub struct GroupUseCases {
    pub create: Arc<dyn CreateGroupUseCase + Send + Sync>,
    pub get: Arc<dyn GetGroupUseCase + Send + Sync>,
    pub list: Arc<dyn ListGroupsUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateGroupUseCase + Send + Sync>,
    pub join: Arc<dyn JoinGroupUseCase + Send + Sync>,
    pub add_member: Arc<dyn AddGroupMemberUseCase + Send + Sync>,
    pub remove_member: Arc<dyn RemoveGroupMemberUseCase + Send + Sync>,
    pub change_member_role: Arc<dyn ChangeMemberRoleUseCase + Send + Sync>,
    pub set_tags: Arc<dyn SetGroupTagsUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteGroupUseCase + Send + Sync>,
    pub restore: Arc<dyn RestoreGroupUseCase + Send + Sync>,
}
