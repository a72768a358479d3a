use std::sync::Arc;

use crate::event::application::ports::incoming::use_cases::{
    AddAttendeeUseCase, CreateEventUseCase, DeleteEventUseCase, GetEventUseCase,
    ListEventsUseCase, RemoveAttendeeUseCase, RestoreEventUseCase, SetEventTagsUseCase,
};

#[derive(Clone)]
pub struct EventUseCases {
    pub create: Arc<dyn CreateEventUseCase + Send + Sync>,
    pub get: Arc<dyn GetEventUseCase + Send + Sync>,
    pub list: Arc<dyn ListEventsUseCase + Send + Sync>,
    pub add_attendee: Arc<dyn AddAttendeeUseCase + Send + Sync>,
    pub remove_attendee: Arc<dyn RemoveAttendeeUseCase + Send + Sync>,
    pub set_tags: Arc<dyn SetEventTagsUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteEventUseCase + Send + Sync>,
    pub restore: Arc<dyn RestoreEventUseCase + Send + Sync>,
}
