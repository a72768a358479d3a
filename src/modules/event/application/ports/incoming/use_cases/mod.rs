mod add_attendee;
mod create_event;
mod delete_event;
mod get_event;
mod list_events;
mod remove_attendee;
mod restore_event;
mod set_event_tags;

pub use add_attendee::{AddAttendeeCommand, AddAttendeeError, AddAttendeeUseCase};
pub(crate) use create_event::attendee_field;
pub use create_event::{
    AttendeeForm, CreateEventCommand, CreateEventError, CreateEventForm, CreateEventUseCase,
    LocationForm, MAX_EVENT_DESCRIPTION_LEN, MAX_EVENT_MODE_LEN, MAX_EVENT_TITLE_LEN,
};
pub use delete_event::{DeleteEventError, DeleteEventUseCase};
pub use get_event::{GetEventError, GetEventUseCase};
pub use list_events::{ListEventsError, ListEventsUseCase};
pub use remove_attendee::{RemoveAttendeeError, RemoveAttendeeUseCase};
pub use restore_event::{RestoreEventError, RestoreEventUseCase};
pub use set_event_tags::{SetEventTagsError, SetEventTagsUseCase};
