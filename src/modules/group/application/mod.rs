pub mod domain;
pub mod helpers;
pub mod ports;
pub mod services;
mod group_use_cases;

pub use group_use_cases::GroupUseCases;
