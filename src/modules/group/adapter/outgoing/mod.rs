pub mod group_member_repository_sql;
pub mod group_query_sql;
pub mod group_repository_sql;
pub mod sea_orm_entity;

pub use group_member_repository_sql::GroupMemberRepositorySql;
pub use group_query_sql::GroupQuerySql;
pub use group_repository_sql::GroupRepositorySql;
