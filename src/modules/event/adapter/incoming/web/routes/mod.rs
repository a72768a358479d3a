mod add_attendee;
mod create_event;
mod delete_event;
mod get_event;
mod list_events;
mod remove_attendee;
mod restore_event;
mod set_event_tags;

pub use add_attendee::{add_attendee_handler, AddAttendeeRequest};
pub use create_event::{create_event_handler, AttendeeRequest, CreateEventRequest, LocationRequest};
pub use delete_event::delete_event_handler;
pub use get_event::get_event_handler;
pub use list_events::{list_events_handler, ListEventsQuery};
pub use remove_attendee::remove_attendee_handler;
pub use restore_event::restore_event_handler;
pub use set_event_tags::{set_event_tags_handler, SetEventTagsRequest};

pub use add_attendee::__path_add_attendee_handler;
pub use create_event::__path_create_event_handler;
pub use delete_event::__path_delete_event_handler;
pub use get_event::__path_get_event_handler;
pub use list_events::__path_list_events_handler;
pub use remove_attendee::__path_remove_attendee_handler;
pub use restore_event::__path_restore_event_handler;
pub use set_event_tags::__path_set_event_tags_handler;
