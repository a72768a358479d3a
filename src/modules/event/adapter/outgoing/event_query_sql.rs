use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::event::application::domain::entities::{
    Attendee, Event, EventId, Location, LocationId,
};
use crate::event::application::ports::outgoing::{EventQuery, EventQueryError};
use crate::group::application::domain::entities::GroupId;
use crate::tag::adapter::outgoing::sea_orm_entity::tags::{
    Column as TagColumn, Entity as TagEntity,
};
use crate::tag::application::domain::entities::Tag;
use crate::user::adapter::outgoing::sea_orm_entity::users::{self, Entity as UserEntity};
use crate::user::application::domain::entities::UserId;

use super::sea_orm_entity::event_attendees::{
    Column as AttendeeColumn, Entity as AttendeeEntity, Model as AttendeeModel,
};
use super::sea_orm_entity::event_tags::{Column as EventTagColumn, Entity as EventTagEntity};
use super::sea_orm_entity::events::{
    Column as EventColumn, Entity as EventEntity, Model as EventModel,
};
use super::sea_orm_entity::locations::{Entity as LocationEntity, Model as LocationModel};

#[derive(Clone, Debug)]
pub struct EventQuerySql {
    db: Arc<DatabaseConnection>,
}

impl EventQuerySql {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn db_err(e: DbErr) -> EventQueryError {
    EventQueryError::DatabaseError(e.to_string())
}

fn to_attendee((attendee, user): (AttendeeModel, Option<users::Model>)) -> Option<Attendee> {
    user.map(|u| attendee.to_attendee(&u.username))
}

#[async_trait]
impl EventQuery for EventQuerySql {
    async fn find_by_id(&self, event_id: EventId) -> Result<Option<Event>, EventQueryError> {
        let model = EventEntity::find_by_id(event_id.value())
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(model.as_ref().map(EventModel::to_event))
    }

    async fn list_active_events(&self) -> Result<Vec<Event>, EventQueryError> {
        let models = EventEntity::find()
            .filter(EventColumn::IsDeleted.eq(false))
            .order_by_asc(EventColumn::StartDate)
            .order_by_asc(EventColumn::Id)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(models.iter().map(EventModel::to_event).collect())
    }

    async fn list_group_events(&self, group_id: GroupId) -> Result<Vec<Event>, EventQueryError> {
        let models = EventEntity::find()
            .filter(EventColumn::GroupId.eq(group_id.value()))
            .filter(EventColumn::IsDeleted.eq(false))
            .order_by_asc(EventColumn::StartDate)
            .order_by_asc(EventColumn::Id)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(models.iter().map(EventModel::to_event).collect())
    }

    async fn list_attendees(&self, event_id: EventId) -> Result<Vec<Attendee>, EventQueryError> {
        let rows = AttendeeEntity::find()
            .filter(AttendeeColumn::EventId.eq(event_id.value()))
            .filter(AttendeeColumn::IsDeleted.eq(false))
            .find_also_related(UserEntity)
            .order_by_asc(AttendeeColumn::CreatedAt)
            .order_by_asc(AttendeeColumn::Id)
            .all(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(rows.into_iter().filter_map(to_attendee).collect())
    }

    async fn find_attendance(
        &self,
        event_id: EventId,
        user_id: UserId,
    ) -> Result<Option<Attendee>, EventQueryError> {
        let row = AttendeeEntity::find()
            .filter(AttendeeColumn::EventId.eq(event_id.value()))
            .filter(AttendeeColumn::UserId.eq(user_id.value()))
            .filter(AttendeeColumn::IsDeleted.eq(false))
            .find_also_related(UserEntity)
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(row.and_then(to_attendee))
    }

    async fn list_event_tags(&self, event_id: EventId) -> Result<Vec<Tag>, EventQueryError> {
        let rows = EventTagEntity::find()
            .filter(EventTagColumn::EventId.eq(event_id.value()))
            .filter(EventTagColumn::IsDeleted.eq(false))
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

    async fn find_location(
        &self,
        location_id: LocationId,
    ) -> Result<Option<Location>, EventQueryError> {
        let model = LocationEntity::find_by_id(location_id.value())
            .one(&*self.db)
            .await
            .map_err(db_err)?;

        Ok(model.as_ref().map(LocationModel::to_location))
    }
}
