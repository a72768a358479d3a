use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::prelude::DateTimeWithTimeZone;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DatabaseTransaction,
    DbErr, EntityTrait, QueryFilter, Set, TransactionTrait,
};

use crate::event::application::domain::entities::{Event, EventId, EventRole};
use crate::event::application::ports::outgoing::{
    CreateEventData, EventRepository, EventRepositoryError,
};
use crate::shared::db::{classify_db_error, rollback, DbFailure};
use crate::tag::application::domain::entities::TagId;

use super::sea_orm_entity::event_attendees::{
    ActiveModel as AttendeeActiveModel, Entity as AttendeeEntity,
};
use super::sea_orm_entity::event_tags::{
    ActiveModel as EventTagActiveModel, Column as EventTagColumn, Entity as EventTagEntity,
};
use super::sea_orm_entity::events::{
    ActiveModel as EventActiveModel, Entity as EventEntity, Model as EventModel,
};
use super::sea_orm_entity::locations::ActiveModel as LocationActiveModel;

#[derive(Clone, Debug)]
pub struct EventRepositorySql {
    db: Arc<DatabaseConnection>,
}

impl EventRepositorySql {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_db_err(e: DbErr) -> EventRepositoryError {
        match classify_db_error(&e) {
            DbFailure::UniqueViolation(_) => EventRepositoryError::DuplicateAttendee,
            DbFailure::ForeignKeyViolation(_) => EventRepositoryError::MissingReference,
            DbFailure::Other(msg) => EventRepositoryError::DatabaseError(msg),
        }
    }

    async fn load<C>(conn: &C, event_id: EventId) -> Result<EventModel, EventRepositoryError>
    where
        C: ConnectionTrait,
    {
        EventEntity::find_by_id(event_id.value())
            .one(conn)
            .await
            .map_err(Self::map_db_err)?
            .ok_or(EventRepositoryError::EventNotFound)
    }

    async fn link_tags<C>(conn: &C, event_id: i32, tag_ids: &[TagId]) -> Result<(), DbErr>
    where
        C: ConnectionTrait,
    {
        if tag_ids.is_empty() {
            return Ok(());
        }

        let now: DateTimeWithTimeZone = Utc::now().into();
        let rows = tag_ids.iter().map(|tag_id| EventTagActiveModel {
            id: NotSet,
            event_id: Set(event_id),
            tag_id: Set(tag_id.value()),
            is_deleted: Set(false),
            created_at: Set(now),
            updated_at: Set(now),
        });

        EventTagEntity::insert_many(rows)
            .exec_without_returning(conn)
            .await?;
        Ok(())
    }

    /// The owner always goes in first, as organizer.
    async fn insert_event(
        txn: &DatabaseTransaction,
        data: CreateEventData,
    ) -> Result<EventModel, DbErr> {
        let location = LocationActiveModel {
            id: NotSet,
            address: Set(data.location.address),
            city: Set(data.location.city),
            state: Set(data.location.state),
            country: Set(data.location.country),
            latitude: Set(data.location.latitude),
            longitude: Set(data.location.longitude),
            is_deleted: Set(false),
            created_at: NotSet,
            updated_at: NotSet,
        }
        .insert(txn)
        .await?;

        let event = EventActiveModel {
            id: NotSet,
            title: Set(data.title),
            description: Set(data.description),
            start_date: Set(data.start_date.into()),
            end_date: Set(data.end_date.map(Into::into)),
            mode: Set(data.mode),
            owner_id: Set(data.owner_id.value()),
            group_id: Set(data.group_id.map(|g| g.value())),
            location_id: Set(location.id),
            is_deleted: Set(false),
            created_at: NotSet,
            updated_at: NotSet,
        }
        .insert(txn)
        .await?;

        let now: DateTimeWithTimeZone = Utc::now().into();
        let attendees = std::iter::once((data.owner_id, EventRole::Organizer))
            .chain(data.attendees)
            .map(|(user_id, role)| AttendeeActiveModel {
                id: NotSet,
                user_id: Set(user_id.value()),
                event_id: Set(event.id),
                role: Set(role),
                is_deleted: Set(false),
                created_at: Set(now),
                updated_at: Set(now),
            });
        AttendeeEntity::insert_many(attendees)
            .exec_without_returning(txn)
            .await?;

        Self::link_tags(txn, event.id, &data.tag_ids).await?;

        Ok(event)
    }
}

#[async_trait]
impl EventRepository for EventRepositorySql {
    async fn create_event(&self, data: CreateEventData) -> Result<Event, EventRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        match Self::insert_event(&txn, data).await {
            Ok(event) => {
                txn.commit().await.map_err(Self::map_db_err)?;
                Ok(event.to_event())
            }
            Err(e) => {
                rollback(txn).await;
                Err(Self::map_db_err(e))
            }
        }
    }

    async fn soft_delete_event(&self, event_id: EventId) -> Result<(), EventRepositoryError> {
        let model = Self::load(&*self.db, event_id).await?;
        if model.is_deleted {
            return Ok(());
        }

        let mut active: EventActiveModel = model.into();
        active.is_deleted = Set(true);
        active.update(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(())
    }

    async fn restore_event(&self, event_id: EventId) -> Result<Event, EventRepositoryError> {
        let model = Self::load(&*self.db, event_id).await?;
        if !model.is_deleted {
            return Ok(model.to_event());
        }

        let mut active: EventActiveModel = model.into();
        active.is_deleted = Set(false);
        let restored = active.update(&*self.db).await.map_err(Self::map_db_err)?;

        Ok(restored.to_event())
    }

    async fn set_event_tags(
        &self,
        event_id: EventId,
        tag_ids: &[TagId],
    ) -> Result<(), EventRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        if let Err(e) = Self::load(&txn, event_id).await {
            rollback(txn).await;
            return Err(e);
        }

        let replaced = async {
            EventTagEntity::delete_many()
                .filter(EventTagColumn::EventId.eq(event_id.value()))
                .exec(&txn)
                .await?;
            Self::link_tags(&txn, event_id.value(), tag_ids).await
        }
        .await;

        if let Err(e) = replaced {
            rollback(txn).await;
            return Err(Self::map_db_err(e));
        }

        txn.commit().await.map_err(Self::map_db_err)
    }
}
