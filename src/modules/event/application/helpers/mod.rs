mod event_access;

pub use event_access::{
    active_event, load_event, require_event_owner, require_organizer, EventAccessError,
};
