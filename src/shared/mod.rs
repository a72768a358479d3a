pub mod api;
pub mod db;
pub mod id;
pub mod validation;
