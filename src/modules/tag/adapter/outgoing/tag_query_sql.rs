use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::tag::application::domain::entities::{Tag, TagId};
use crate::tag::application::ports::outgoing::{TagQuery, TagQueryError};

use super::sea_orm_entity::tags::{Column as TagColumn, Entity as TagEntity, Model as TagModel};

#[derive(Clone, Debug)]
pub struct TagQuerySql {
    db: Arc<DatabaseConnection>,
}

impl TagQuerySql {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: sea_orm::DbErr) -> TagQueryError {
    TagQueryError::DatabaseError(e.to_string())
}

#[async_trait]
impl TagQuery for TagQuerySql {
    async fn find_by_id(&self, tag_id: TagId) -> Result<Option<Tag>, TagQueryError> {
        let model = TagEntity::find_by_id(tag_id.value())
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(model.as_ref().map(TagModel::to_tag))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Tag>, TagQueryError> {
        let model = TagEntity::find()
            .filter(TagColumn::Name.eq(name))
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(model.as_ref().map(TagModel::to_tag))
    }

    async fn find_by_ids(&self, ids: &[TagId]) -> Result<Vec<Tag>, TagQueryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let models = TagEntity::find()
            .filter(TagColumn::Id.is_in(ids.iter().map(TagId::value)))
            .order_by_asc(TagColumn::Name)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(models.iter().map(TagModel::to_tag).collect())
    }

    async fn list_active_tags(&self) -> Result<Vec<Tag>, TagQueryError> {
        let models = TagEntity::find()
            .filter(TagColumn::IsDeleted.eq(false))
            .order_by_asc(TagColumn::Name)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(models.iter().map(TagModel::to_tag).collect())
    }
}
