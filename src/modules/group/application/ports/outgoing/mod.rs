pub mod group_member_repository;
pub mod group_query;
pub mod group_repository;

pub use group_member_repository::{GroupMemberRepository, GroupMemberRepositoryError};
pub use group_query::{GroupQuery, GroupQueryError};
pub use group_repository::{
    CreateGroupData, GroupRepository, GroupRepositoryError, UpdateGroupData,
};
