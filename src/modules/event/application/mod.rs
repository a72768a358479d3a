pub mod domain;
pub mod helpers;
pub mod ports;
pub mod services;
mod event_use_cases;

pub use event_use_cases::EventUseCases;
