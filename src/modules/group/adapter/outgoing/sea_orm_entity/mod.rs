pub mod group_members;
pub mod group_tags;
pub mod groups;
