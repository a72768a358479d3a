mod add_attendee_service;
mod create_event_service;
mod delete_event_service;
mod get_event_service;
mod remove_attendee_service;
mod set_event_tags_service;

pub use add_attendee_service::AddAttendeeService;
pub use create_event_service::CreateEventService;
pub use delete_event_service::{DeleteEventService, RestoreEventService};
pub use get_event_service::{GetEventService, ListEventsService};
pub use remove_attendee_service::RemoveAttendeeService;
pub use set_event_tags_service::SetEventTagsService;
