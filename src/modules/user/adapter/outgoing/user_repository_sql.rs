use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};

use crate::shared::db::{classify_db_error, DbFailure};
use crate::user::application::domain::entities::{User, UserId, DEFAULT_BIO};
use crate::user::application::ports::outgoing::{
    CreateUserData, UpdateProfileData, UserRepository, UserRepositoryError,
};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Entity as UserEntity, Model as UserModel,
};

#[derive(Clone, Debug)]
pub struct UserRepositorySql {
    db: Arc<DatabaseConnection>,
}

impl UserRepositorySql {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_write_err(e: DbErr) -> UserRepositoryError {
        match classify_db_error(&e) {
            DbFailure::UniqueViolation(_) => UserRepositoryError::UserAlreadyExists,
            _ => UserRepositoryError::DatabaseError(e.to_string()),
        }
    }

    async fn load(&self, user_id: UserId) -> Result<UserModel, UserRepositoryError> {
        UserEntity::find_by_id(user_id.value())
            .one(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(UserRepositoryError::UserNotFound)
    }
}

#[async_trait]
impl UserRepository for UserRepositorySql {
    async fn create_user(&self, data: CreateUserData) -> Result<User, UserRepositoryError> {
        let active = UserActiveModel {
            id: NotSet,
            username: Set(data.username),
            first_name: Set(data.first_name),
            last_name: Set(data.last_name),
            email: Set(data.email),
            password_hash: Set(data.password_hash),
            bio: Set(data.bio.unwrap_or_else(|| DEFAULT_BIO.to_string())),
            is_deleted: Set(false),
            created_at: NotSet,
            updated_at: NotSet,
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_err)?;

        Ok(inserted.to_user())
    }

    async fn update_profile(
        &self,
        user_id: UserId,
        data: UpdateProfileData,
    ) -> Result<User, UserRepositoryError> {
        let mut active: UserActiveModel = self.load(user_id).await?.into();

        if let Some(first_name) = data.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = data.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(bio) = data.bio {
            active.bio = Set(bio);
        }

        let updated = active
            .update(&*self.db)
            .await
            .map_err(Self::map_write_err)?;

        Ok(updated.to_user())
    }

    async fn set_password_hash(
        &self,
        user_id: UserId,
        password_hash: String,
    ) -> Result<(), UserRepositoryError> {
        let mut active: UserActiveModel = self.load(user_id).await?.into();
        active.password_hash = Set(password_hash);

        active
            .update(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn delete_user(&self, user_id: UserId) -> Result<(), UserRepositoryError> {
        let result = UserEntity::delete_by_id(user_id.value())
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(())
    }
}
