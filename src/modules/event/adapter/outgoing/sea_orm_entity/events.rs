use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;

use crate::event::application::domain::entities::{Event, EventId, LocationId};
use crate::group::application::domain::entities::GroupId;
use crate::user::application::domain::entities::UserId;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "events")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: String,
    pub start_date: DateTimeWithTimeZone,
    pub end_date: Option<DateTimeWithTimeZone>,
    pub mode: String,
    pub owner_id: i32,
    pub group_id: Option<i32>,
    pub location_id: i32,
    pub is_deleted: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_event(&self) -> Event {
        Event {
            id: EventId::from(self.id),
            title: self.title.clone(),
            description: self.description.clone(),
            start_date: self.start_date.into(),
            end_date: self.end_date.map(Into::into),
            mode: self.mode.clone(),
            owner_id: UserId::from(self.owner_id),
            group_id: self.group_id.map(GroupId::from),
            location_id: LocationId::from(self.location_id),
            is_deleted: self.is_deleted,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::user::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::OwnerId",
        to = "crate::user::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Owner,

    #[sea_orm(
        belongs_to = "crate::group::adapter::outgoing::sea_orm_entity::groups::Entity",
        from = "Column::GroupId",
        to = "crate::group::adapter::outgoing::sea_orm_entity::groups::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Group,

    #[sea_orm(
        belongs_to = "super::locations::Entity",
        from = "Column::LocationId",
        to = "super::locations::Column::Id",
        on_delete = "Cascade",
        on_update = "Cascade"
    )]
    Location,
}

impl Related<super::locations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now: DateTimeWithTimeZone = Utc::now().into();
        if insert && self.created_at.is_not_set() {
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);

        Ok(self)
    }
}
