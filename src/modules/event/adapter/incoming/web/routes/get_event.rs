use actix_web::{get, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::event::application::domain::entities::{EventDetails, EventId};
use crate::event::application::ports::incoming::use_cases::GetEventError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Fetch an event with its location, attendees and tags
#[utoipa::path(
    get,
    path = "/api/events/{id}",
    tag = "events",
    params(("id" = i32, Path, description = "Event id")),
    responses(
        (status = 200, description = "Event found", body = inline(SuccessResponse<EventDetails>)),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/events/{id}")]
pub async fn get_event_handler(path: web::Path<i32>, data: web::Data<AppState>) -> impl Responder {
    let event_id = EventId::from(path.into_inner());

    match data.event.get.execute(event_id).await {
        Ok(details) => ApiResponse::success(details),
        Err(GetEventError::EventNotFound) => {
            warn!(event_id = %event_id, "Event not found");
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }
        Err(e) => {
            error!(event_id = %event_id, error = %e, "Failed to fetch event");
            ApiResponse::internal_error()
        }
    }
}
