pub mod event_attendee_repository_sql;
pub mod event_query_sql;
pub mod event_repository_sql;
pub mod sea_orm_entity;

pub use event_attendee_repository_sql::EventAttendeeRepositorySql;
pub use event_query_sql::EventQuerySql;
pub use event_repository_sql::EventRepositorySql;
