pub mod event;
pub mod group;
pub mod tag;
pub mod user;
