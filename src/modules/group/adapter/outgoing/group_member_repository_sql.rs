use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};

use crate::group::application::domain::entities::{GroupId, GroupMember, GroupRole};
use crate::group::application::ports::outgoing::{
    GroupMemberRepository, GroupMemberRepositoryError,
};
use crate::shared::db::{classify_db_error, DbFailure};
use crate::user::adapter::outgoing::sea_orm_entity::users::Entity as UserEntity;
use crate::user::application::domain::entities::UserId;

use super::sea_orm_entity::group_members::{
    ActiveModel as MemberActiveModel, Column as MemberColumn, Entity as MemberEntity,
};

#[derive(Clone, Debug)]
pub struct GroupMemberRepositorySql {
    db: Arc<DatabaseConnection>,
}

impl GroupMemberRepositorySql {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> GroupMemberRepositoryError {
        match classify_db_error(&e) {
            DbFailure::UniqueViolation(_) => GroupMemberRepositoryError::AlreadyMember,
            DbFailure::ForeignKeyViolation(_) => GroupMemberRepositoryError::MissingReference,
            DbFailure::Other(msg) => GroupMemberRepositoryError::DatabaseError(msg),
        }
    }
}

#[async_trait]
impl GroupMemberRepository for GroupMemberRepositorySql {
    async fn add_member(
        &self,
        group_id: GroupId,
        user_id: UserId,
        role: GroupRole,
    ) -> Result<GroupMember, GroupMemberRepositoryError> {
        let inserted = MemberActiveModel {
            id: NotSet,
            group_id: Set(group_id.value()),
            user_id: Set(user_id.value()),
            role: Set(role),
            is_deleted: Set(false),
            created_at: NotSet,
            updated_at: NotSet,
        }
        .insert(&*self.db)
        .await
        .map_err(Self::map_db_err)?;

        let user = UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(GroupMemberRepositoryError::MissingReference)?;

        Ok(inserted.to_member(&user.username))
    }

    async fn remove_member(
        &self,
        group_id: GroupId,
        user_id: UserId,
    ) -> Result<(), GroupMemberRepositoryError> {
        let result = MemberEntity::delete_many()
            .filter(MemberColumn::GroupId.eq(group_id.value()))
            .filter(MemberColumn::UserId.eq(user_id.value()))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(GroupMemberRepositoryError::MembershipNotFound);
        }
        Ok(())
    }

    async fn change_role(
        &self,
        group_id: GroupId,
        user_id: UserId,
        role: GroupRole,
    ) -> Result<GroupMember, GroupMemberRepositoryError> {
        let (member, user) = MemberEntity::find()
            .filter(MemberColumn::GroupId.eq(group_id.value()))
            .filter(MemberColumn::UserId.eq(user_id.value()))
            .find_also_related(UserEntity)
            .one(&*self.db)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(GroupMemberRepositoryError::MembershipNotFound)?;

        let username = user
            .map(|u| u.username)
            .ok_or(GroupMemberRepositoryError::MissingReference)?;

        let mut active: MemberActiveModel = member.into();
        active.role = Set(role);
        let updated = active.update(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(updated.to_member(&username))
    }
}
