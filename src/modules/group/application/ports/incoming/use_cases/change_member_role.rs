use async_trait::async_trait;

use crate::group::application::domain::entities::{GroupId, GroupMember, GroupRole};
use crate::shared::validation::FieldErrors;
use crate::user::application::domain::entities::UserId;

use super::add_group_member::GROUP_ROLE_MSG;

#[derive(Debug, Clone, Copy)]
pub struct ChangeMemberRoleCommand {
    role: GroupRole,
}

impl ChangeMemberRoleCommand {
    pub fn new(role: &str) -> Result<Self, FieldErrors> {
        match GroupRole::parse_assignable(role) {
            Some(role) => Ok(Self { role }),
            None => {
                let mut errors = FieldErrors::new();
                errors.add("role", GROUP_ROLE_MSG);
                Err(errors)
            }
        }
    }

    pub fn role(&self) -> GroupRole {
        self.role
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ChangeMemberRoleError {
    #[error("Group not found")]
    GroupNotFound,

    #[error("Not permitted to manage members of this group")]
    Forbidden,

    #[error("The owner's role cannot be changed")]
    CannotChangeOwner,

    #[error("Membership not found")]
    MembershipNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ChangeMemberRoleUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: UserId,
        group_id: GroupId,
        member_id: UserId,
        command: ChangeMemberRoleCommand,
    ) -> Result<GroupMember, ChangeMemberRoleError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_assignable_roles() {
        assert_eq!(
            ChangeMemberRoleCommand::new("admin").unwrap().role(),
            GroupRole::Admin
        );
        assert!(ChangeMemberRoleCommand::new("owner").is_err());
    }
}
