pub mod event_attendee_repository;
pub mod event_query;
pub mod event_repository;

pub use event_attendee_repository::{EventAttendeeRepository, EventAttendeeRepositoryError};
pub use event_query::{EventQuery, EventQueryError};
pub use event_repository::{CreateEventData, EventRepository, EventRepositoryError, NewLocation};
