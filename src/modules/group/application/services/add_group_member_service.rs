use async_trait::async_trait;
use tracing::info;

use crate::group::application::domain::entities::{GroupId, GroupMember};
use crate::group::application::helpers::require_manager;
use crate::group::application::ports::{
    incoming::use_cases::{AddGroupMemberCommand, AddGroupMemberError, AddGroupMemberUseCase},
    outgoing::{GroupMemberRepository, GroupMemberRepositoryError, GroupQuery},
};
use crate::shared::validation::FieldErrors;
use crate::user::application::domain::entities::UserId;
use crate::user::application::helpers::{ResolveUserIdError, UserIdentityResolver};

#[derive(Clone)]
pub struct AddGroupMemberService<Q, M>
where
    Q: GroupQuery + Send + Sync,
    M: GroupMemberRepository + Send + Sync,
{
    query: Q,
    members: M,
    users: UserIdentityResolver,
}

impl<Q, M> AddGroupMemberService<Q, M>
where
    Q: GroupQuery + Send + Sync,
    M: GroupMemberRepository + Send + Sync,
{
    pub fn new(query: Q, members: M, users: UserIdentityResolver) -> Self {
        Self {
            query,
            members,
            users,
        }
    }
}

#[async_trait]
impl<Q, M> AddGroupMemberUseCase for AddGroupMemberService<Q, M>
where
    Q: GroupQuery + Send + Sync,
    M: GroupMemberRepository + Send + Sync,
{
    async fn execute(
        &self,
        actor: UserId,
        group_id: GroupId,
        command: AddGroupMemberCommand,
    ) -> Result<GroupMember, AddGroupMemberError> {
        require_manager(&self.query, group_id, actor).await?;

        let user_id = match self.users.by_username(command.username()).await {
            Ok(id) => id,
            Err(ResolveUserIdError::NotFound) => {
                let mut errors = FieldErrors::new();
                errors.add(
                    "username",
                    format!("User '{}' does not exist.", command.username()),
                );
                return Err(AddGroupMemberError::Validation(errors));
            }
            Err(ResolveUserIdError::RepositoryError(msg)) => {
                return Err(AddGroupMemberError::RepositoryError(msg))
            }
        };

        let member = self
            .members
            .add_member(group_id, user_id, command.role())
            .await
            .map_err(|e| match e {
                GroupMemberRepositoryError::AlreadyMember => AddGroupMemberError::AlreadyMember,
                GroupMemberRepositoryError::MissingReference => AddGroupMemberError::GroupNotFound,
                other => AddGroupMemberError::RepositoryError(other.to_string()),
            })?;

        info!(
            group_id = %group_id,
            user_id = %user_id,
            role = member.role.as_str(),
            "Member added to group"
        );
        Ok(member)
    }
}
