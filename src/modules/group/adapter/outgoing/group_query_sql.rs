use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::group::application::domain::entities::{Group, GroupId, GroupMember};
use crate::group::application::ports::outgoing::{GroupQuery, GroupQueryError};
use crate::tag::adapter::outgoing::sea_orm_entity::tags::{
    Column as TagColumn, Entity as TagEntity,
};
use crate::tag::application::domain::entities::Tag;
use crate::user::adapter::outgoing::sea_orm_entity::users::{self, Entity as UserEntity};
use crate::user::application::domain::entities::UserId;

use super::sea_orm_entity::group_members::{
    Column as MemberColumn, Entity as MemberEntity, Model as MemberModel,
};
use super::sea_orm_entity::group_tags::{Column as GroupTagColumn, Entity as GroupTagEntity};
use super::sea_orm_entity::groups::{
    Column as GroupColumn, Entity as GroupEntity, Model as GroupModel,
};

#[derive(Clone, Debug)]
pub struct GroupQuerySql {
    db: Arc<DatabaseConnection>,
}

impl GroupQuerySql {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: DbErr) -> GroupQueryError {
    GroupQueryError::DatabaseError(e.to_string())
}

/// Membership rows whose user row is gone are skipped.
fn to_member((member, user): (MemberModel, Option<users::Model>)) -> Option<GroupMember> {
    user.map(|u| member.to_member(&u.username))
}

#[async_trait]
impl GroupQuery for GroupQuerySql {
    async fn find_by_id(&self, group_id: GroupId) -> Result<Option<Group>, GroupQueryError> {
        let model = GroupEntity::find_by_id(group_id.value())
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(model.as_ref().map(GroupModel::to_group))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Group>, GroupQueryError> {
        let model = GroupEntity::find()
            .filter(GroupColumn::Name.eq(name))
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(model.as_ref().map(GroupModel::to_group))
    }

    async fn list_active_groups(&self) -> Result<Vec<Group>, GroupQueryError> {
        let models = GroupEntity::find()
            .filter(GroupColumn::IsDeleted.eq(false))
            .order_by_asc(GroupColumn::Name)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(models.iter().map(GroupModel::to_group).collect())
    }

    async fn list_members(&self, group_id: GroupId) -> Result<Vec<GroupMember>, GroupQueryError> {
        let rows = MemberEntity::find()
            .filter(MemberColumn::GroupId.eq(group_id.value()))
            .filter(MemberColumn::IsDeleted.eq(false))
            .find_also_related(UserEntity)
            .order_by_asc(MemberColumn::CreatedAt)
            .order_by_asc(MemberColumn::Id)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().filter_map(to_member).collect())
    }

    async fn find_membership(
        &self,
        group_id: GroupId,
        user_id: UserId,
    ) -> Result<Option<GroupMember>, GroupQueryError> {
        let row = MemberEntity::find()
            .filter(MemberColumn::GroupId.eq(group_id.value()))
            .filter(MemberColumn::UserId.eq(user_id.value()))
            .filter(MemberColumn::IsDeleted.eq(false))
            .find_also_related(UserEntity)
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(row.and_then(to_member))
    }

    async fn list_group_tags(&self, group_id: GroupId) -> Result<Vec<Tag>, GroupQueryError> {
        let rows = GroupTagEntity::find()
            .filter(GroupTagColumn::GroupId.eq(group_id.value()))
            .filter(GroupTagColumn::IsDeleted.eq(false))
            .find_also_related(TagEntity)
            .filter(TagColumn::IsDeleted.eq(false))
            .order_by_asc(TagColumn::Name)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(rows
            .into_iter()
            .filter_map(|(_, tag)| tag.map(|t| t.to_tag()))
            .collect())
    }
}
