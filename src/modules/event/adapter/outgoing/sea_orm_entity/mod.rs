pub mod event_attendees;
pub mod event_tags;
pub mod events;
pub mod locations;
