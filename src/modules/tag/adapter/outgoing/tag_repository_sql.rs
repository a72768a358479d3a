use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::shared::db::{classify_db_error, DbFailure};
use crate::tag::application::domain::entities::{Tag, TagId};
use crate::tag::application::ports::outgoing::{TagRepository, TagRepositoryError};

use super::sea_orm_entity::tags::{ActiveModel as TagActiveModel, Entity as TagEntity};

#[derive(Clone, Debug)]
pub struct TagRepositorySql {
    db: Arc<DatabaseConnection>,
}

impl TagRepositorySql {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TagRepository for TagRepositorySql {
    async fn create_tag(&self, name: &str) -> Result<Tag, TagRepositoryError> {
        let active = TagActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            is_deleted: Set(false),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| match classify_db_error(&e) {
                DbFailure::UniqueViolation(_) => TagRepositoryError::TagAlreadyExists,
                _ => TagRepositoryError::DatabaseError(e.to_string()),
            })?;

        Ok(inserted.to_tag())
    }

    async fn soft_delete_tag(&self, tag_id: TagId) -> Result<(), TagRepositoryError> {
        let model = TagEntity::find_by_id(tag_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| TagRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(TagRepositoryError::TagNotFound)?;

        if model.is_deleted {
            return Ok(());
        }

        let mut active: TagActiveModel = model.into();
        active.is_deleted = Set(true);
        active
            .update(&*self.db)
            .await
            .map_err(|e| TagRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
