use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::user::application::domain::entities::{User, UserCredentials, UserId};
use crate::user::application::ports::outgoing::{UserQuery, UserQueryError};

use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity, Model as UserModel};

#[derive(Clone, Debug)]
pub struct UserQuerySql {
    db: Arc<DatabaseConnection>,
}

impl UserQuerySql {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_one_by(
        &self,
        column: UserColumn,
        value: &str,
    ) -> Result<Option<UserModel>, UserQueryError> {
        UserEntity::find()
            .filter(column.eq(value))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))
    }

    async fn find_model(&self, user_id: UserId) -> Result<Option<UserModel>, UserQueryError> {
        UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))
    }
}

#[async_trait]
impl UserQuery for UserQuerySql {
    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, UserQueryError> {
        Ok(self.find_model(user_id).await?.map(|m| m.to_user()))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, UserQueryError> {
        Ok(self
            .find_one_by(UserColumn::Username, username)
            .await?
            .map(|m| m.to_user()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserQueryError> {
        Ok(self
            .find_one_by(UserColumn::Email, email)
            .await?
            .map(|m| m.to_user()))
    }

    async fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, UserQueryError> {
        Ok(self
            .find_one_by(UserColumn::Username, username)
            .await?
            .map(|m| m.to_credentials()))
    }

    async fn find_credentials_by_id(
        &self,
        user_id: UserId,
    ) -> Result<Option<UserCredentials>, UserQueryError> {
        Ok(self.find_model(user_id).await?.map(|m| m.to_credentials()))
    }

    async fn list_active_users(&self) -> Result<Vec<User>, UserQueryError> {
        let models = UserEntity::find()
            .filter(UserColumn::IsDeleted.eq(false))
            .order_by_asc(UserColumn::Username)
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(UserModel::to_user).collect())
    }
}
