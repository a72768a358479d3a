pub mod jwt;
pub mod sea_orm_entity;
pub mod security;
pub mod user_query_sql;
pub mod user_repository_sql;

pub use user_query_sql::UserQuerySql;
pub use user_repository_sql::UserRepositorySql;
