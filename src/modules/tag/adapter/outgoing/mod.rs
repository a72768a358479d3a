pub mod sea_orm_entity;
pub mod tag_query_sql;
pub mod tag_repository_sql;

pub use tag_query_sql::TagQuerySql;
pub use tag_repository_sql::TagRepositorySql;
