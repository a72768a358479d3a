pub mod domain;
pub mod helpers;
pub mod ports;
pub mod services;
mod tag_use_cases;

pub use tag_use_cases::TagUseCases;
