use async_trait::async_trait;

use crate::group::application::domain::entities::{GroupId, GroupMember, GroupRole};
use crate::shared::validation::{required, FieldErrors};
use crate::user::application::domain::entities::UserId;

pub(crate) const GROUP_ROLE_MSG: &str = "Role must be one of: admin, member.";

#[derive(Debug, Clone)]
pub struct AddGroupMemberCommand {
    username: String,
    role: GroupRole,
}

impl AddGroupMemberCommand {
    /// `role` defaults to member when omitted.
    pub fn new(username: &str, role: Option<&str>) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let username = required(&mut errors, "username", username).map(str::to_string);
        let role = match role {
            None => Some(GroupRole::Member),
            Some(value) => {
                let parsed = GroupRole::parse_assignable(value);
                if parsed.is_none() {
                    errors.add("role", GROUP_ROLE_MSG);
                }
                parsed
            }
        };

        errors.into_result()?;

        Ok(Self {
            username: username.unwrap_or_default(),
            role: role.unwrap_or_default(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn role(&self) -> GroupRole {
        self.role
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AddGroupMemberError {
    #[error("Member rejected: {0}")]
    Validation(FieldErrors),

    #[error("Group not found")]
    GroupNotFound,

    #[error("Not permitted to manage members of this group")]
    Forbidden,

    #[error("User is already a member of this group")]
    AlreadyMember,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AddGroupMemberUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: UserId,
        group_id: GroupId,
        command: AddGroupMemberCommand,
    ) -> Result<GroupMember, AddGroupMemberError>;
}
