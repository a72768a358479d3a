use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    DbErr, EntityTrait, QueryFilter, Set, TransactionTrait,
};

use crate::group::application::domain::entities::{Group, GroupId, GroupRole};
use crate::group::application::ports::outgoing::{
    CreateGroupData, GroupRepository, GroupRepositoryError, UpdateGroupData,
};
use crate::shared::db::{classify_db_error, rollback, DbFailure};
use crate::tag::application::domain::entities::TagId;

use super::sea_orm_entity::group_members::ActiveModel as MemberActiveModel;
use super::sea_orm_entity::group_tags::{
    ActiveModel as GroupTagActiveModel, Column as GroupTagColumn, Entity as GroupTagEntity,
};
use super::sea_orm_entity::groups::{
    ActiveModel as GroupActiveModel, Entity as GroupEntity, Model as GroupModel,
};

#[derive(Clone, Debug)]
pub struct GroupRepositorySql {
    db: Arc<DatabaseConnection>,
}

impl GroupRepositorySql {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> GroupRepositoryError {
        match classify_db_error(&e) {
            DbFailure::UniqueViolation(_) => GroupRepositoryError::GroupAlreadyExists,
            DbFailure::ForeignKeyViolation(_) => GroupRepositoryError::MissingReference,
            DbFailure::Other(_) => GroupRepositoryError::DatabaseError(e.to_string()),
        }
    }

    async fn load<C>(conn: &C, group_id: GroupId) -> Result<GroupModel, GroupRepositoryError>
    where
        C: ConnectionTrait,
    {
        GroupEntity::find_by_id(group_id.value())
            .one(conn)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(GroupRepositoryError::GroupNotFound)
    }

    async fn link_tags<C>(conn: &C, group_id: i32, tag_ids: &[TagId]) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        if tag_ids.is_empty() {
            return Ok(());
        }

        let now: DateTimeWithTimeZone = Utc::now().into();
        let rows = tag_ids.iter().map(|tag_id| GroupTagActiveModel {
            id: NotSet,
            group_id: Set(group_id),
            tag_id: Set(tag_id.value()),
            is_deleted: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        });

        GroupTagEntity::insert_many(rows)
            .exec_without_returning(conn)
            .await?;
        Ok(())
    }

    async fn insert_with_owner(
        txn: &DatabaseTransaction,
        data: CreateGroupData,
    ) -> Result<GroupModel, DbErr> {
        let group = GroupActiveModel {
            id: NotSet,
            name: Set(data.name),
            description: Set(data.description),
            owner_id: Set(data.owner_id.value()),
            is_deleted: Set(false),
            created_at: NotSet,
            updated_at: NotSet,
        }
        .insert(txn)
        .await?;

        MemberActiveModel {
            id: NotSet,
            group_id: Set(group.id),
            user_id: Set(data.owner_id.value()),
            role: Set(GroupRole::Owner),
            is_deleted: Set(false),
            created_at: NotSet,
            updated_at: NotSet,
        }
        .insert(txn)
        .await?;

        Self::link_tags(txn, group.id, &data.tag_ids).await?;

        Ok(group)
    }
}

#[async_trait]
impl GroupRepository for GroupRepositorySql {
    async fn create_group(&self, data: CreateGroupData) -> Result<Group, GroupRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        match Self::insert_with_owner(&txn, data).await {
            Ok(group) => {
                txn.commit().await.map_err(Self::map_db_err)?;
                Ok(group.to_group())
            }
            Err(e) => {
                rollback(txn).await;
                Err(Self::map_db_err(e))
            }
        }
    }

    async fn update_group(
        &self,
        group_id: GroupId,
        data: UpdateGroupData,
    ) -> Result<Group, GroupRepositoryError> {
        let mut active: GroupActiveModel = Self::load(&*self.db, group_id).await?.into();

        if let Some(name) = data.name {
            active.name = Set(name);
        }
        if let Some(description) = data.description {
            active.description = Set(description);
        }

        let updated = active.update(&*self.db).await.map_err(Self::map_db_err)?;
        Ok(updated.to_group())
    }

    async fn soft_delete_group(&self, group_id: GroupId) -> Result<(), GroupRepositoryError> {
        let model = Self::load(&*self.db, group_id).await?;
        if model.is_deleted {
            return Ok(());
        }

        let mut active: GroupActiveModel = model.into();
        active.is_deleted = Set(true);
        active.update(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(())
    }

    async fn restore_group(&self, group_id: GroupId) -> Result<Group, GroupRepositoryError> {
        let model = Self::load(&*self.db, group_id).await?;
        if !model.is_deleted {
            return Ok(model.to_group());
        }

        let mut active: GroupActiveModel = model.into();
        active.is_deleted = Set(false);
        let restored = active.update(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(restored.to_group())
    }

    async fn set_group_tags(
        &self,
        group_id: GroupId,
        tag_ids: &[TagId],
    ) -> Result<(), GroupRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        if let Err(e) = Self::load(&txn, group_id).await {
            rollback(txn).await;
            return Err(e);
        }

        let replaced = async {
            GroupTagEntity::delete_many()
                .filter(GroupTagColumn::GroupId.eq(group_id.value()))
                .exec(&txn)
                .await?;
            Self::link_tags(&txn, group_id.value(), tag_ids).await
        }
        .await;

        if let Err(e) = replaced {
            rollback(txn).await;
            return Err(Self::map_db_err(e));
        }

        txn.commit().await.map_err(Self::map_db_err)
    }
}
