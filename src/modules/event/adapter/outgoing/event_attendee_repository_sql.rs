use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};

use crate::event::application::domain::entities::{Attendee, EventId, EventRole};
use crate::event::application::ports::outgoing::{
    EventAttendeeRepository, EventAttendeeRepositoryError,
};
use crate::shared::db::{classify_db_error, DbFailure};
use crate::user::adapter::outgoing::sea_orm_entity::users::Entity as UserEntity;
use crate::user::application::domain::entities::UserId;

use super::sea_orm_entity::event_attendees::{
    ActiveModel as AttendeeActiveModel, Column as AttendeeColumn, Entity as AttendeeEntity,
};

#[derive(Clone, Debug)]
pub struct EventAttendeeRepositorySql {
    db: Arc<DatabaseConnection>,
}

impl EventAttendeeRepositorySql {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> EventAttendeeRepositoryError {
        match classify_db_error(&e) {
            DbFailure::UniqueViolation(_) => EventAttendeeRepositoryError::AlreadyAttending,
            DbFailure::ForeignKeyViolation(_) => EventAttendeeRepositoryError::MissingReference,
            DbFailure::Other(msg) => EventAttendeeRepositoryError::DatabaseError(msg),
        }
    }
}

#[async_trait]
impl EventAttendeeRepository for EventAttendeeRepositorySql {
    async fn add_attendee(
        &self,
        event_id: EventId,
        user_id: UserId,
        role: EventRole,
    ) -> Result<Attendee, EventAttendeeRepositoryError> {
        let inserted = AttendeeActiveModel {
            id: NotSet,
            user_id: Set(user_id.value()),
            event_id: Set(event_id.value()),
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
            .ok_or(EventAttendeeRepositoryError::MissingReference)?;

        Ok(inserted.to_attendee(&user.username))
    }

    async fn remove_attendee(
        &self,
        event_id: EventId,
        user_id: UserId,
    ) -> Result<(), EventAttendeeRepositoryError> {
        let result = AttendeeEntity::delete_many()
            .filter(AttendeeColumn::EventId.eq(event_id.value()))
            .filter(AttendeeColumn::UserId.eq(user_id.value()))
            .exec(&*self.db)
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected == 0 {
            return Err(EventAttendeeRepositoryError::AttendanceNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, RuntimeErr};

    use crate::event::adapter::outgoing::sea_orm_entity::event_attendees::Model as AttendeeModel;
    use crate::user::adapter::outgoing::sea_orm_entity::users::Model as UserModel;

    fn attendee_model(role: EventRole) -> AttendeeModel {
        let now = Utc::now().fixed_offset();
        AttendeeModel {
            id: 4,
            user_id: 11,
            event_id: 1,
            role,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn bob() -> UserModel {
        let now = Utc::now().fixed_offset();
        UserModel {
            id: 11,
            username: "bob".to_string(),
            first_name: "Bob".to_string(),
            last_name: "Builder".to_string(),
            email: "bob@x.com".to_string(),
            password_hash: "hash".to_string(),
            bio: "No bio".to_string(),
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn add_attendee_returns_username() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![attendee_model(EventRole::Speaker)]])
            .append_query_results(vec![vec![bob()]])
            .into_connection();

        let attendee = EventAttendeeRepositorySql::new(Arc::new(db))
            .add_attendee(EventId::from(1), UserId::from(11), EventRole::Speaker)
            .await
            .unwrap();

        assert_eq!(attendee.username, "bob");
        assert_eq!(attendee.role, EventRole::Speaker);
    }

    #[tokio::test]
    async fn second_attendance_is_already_attending() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"uq_user_event\"".into(),
            ))])
            .into_connection();

        let result = EventAttendeeRepositorySql::new(Arc::new(db))
            .add_attendee(EventId::from(1), UserId::from(11), EventRole::Participant)
            .await;

        assert!(matches!(
            result,
            Err(EventAttendeeRepositoryError::AlreadyAttending)
        ));
    }

    #[tokio::test]
    async fn removing_absent_attendee_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let result = EventAttendeeRepositorySql::new(Arc::new(db))
            .remove_attendee(EventId::from(1), UserId::from(30))
            .await;

        assert!(matches!(
            result,
            Err(EventAttendeeRepositoryError::AttendanceNotFound)
        ));
    }
}
