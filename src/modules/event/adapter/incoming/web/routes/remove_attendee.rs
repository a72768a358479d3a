use actix_web::{delete, web, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::ErrorResponse;
use crate::event::application::domain::entities::EventId;
use crate::event::application::ports::incoming::use_cases::RemoveAttendeeError;
use crate::shared::api::ApiResponse;
use crate::user::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::user::application::domain::entities::UserId;
use crate::AppState;

/// Remove an attendee from an event
///
/// Attendees may remove themselves; removing anyone else takes the owner or
/// an organizer. The owner's attendance cannot be removed.
#[utoipa::path(
    delete,
    path = "/api/events/{id}/attendees/{user_id}",
    tag = "events",
    params(
        ("id" = i32, Path, description = "Event id"),
        ("user_id" = i32, Path, description = "Attendee's user id"),
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Attendee removed"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not permitted, or target is the owner", body = ErrorResponse),
        (status = 404, description = "Event or attendance not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/events/{id}/attendees/{user_id}")]
pub async fn remove_attendee_handler(
    user: AuthenticatedUser,
    path: web::Path<(i32, i32)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (event_id, attendee_id) = path.into_inner();
    let event_id = EventId::from(event_id);
    let attendee_id = UserId::from(attendee_id);

    match data
        .event
        .remove_attendee
        .execute(user.user_id, event_id, attendee_id)
        .await
    {
        Ok(()) => {
            info!(event_id = %event_id, user_id = %attendee_id, "Attendee removed");
            ApiResponse::no_content()
        }
        Err(RemoveAttendeeError::EventNotFound) => {
            warn!(event_id = %event_id, "Attendee removal on missing event");
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }
        Err(RemoveAttendeeError::AttendanceNotFound) => {
            warn!(event_id = %event_id, user_id = %attendee_id, "Attendance not found");
            ApiResponse::not_found("ATTENDANCE_NOT_FOUND", "User is not attending this event")
        }
        Err(RemoveAttendeeError::CannotRemoveOwner) => {
            warn!(event_id = %event_id, "Attempt to remove event owner");
            ApiResponse::forbidden("CANNOT_REMOVE_OWNER", "The event owner cannot be removed")
        }
        Err(RemoveAttendeeError::Forbidden) => {
            warn!(event_id = %event_id, user_id = %user.user_id, "Attendee removal denied");
            ApiResponse::forbidden(
                "FORBIDDEN",
                "Only the owner or an organizer can remove other attendees",
            )
        }
        Err(e) => {
            error!(event_id = %event_id, error = %e, "Attendee removal failed");
            ApiResponse::internal_error()
        }
    }
}
