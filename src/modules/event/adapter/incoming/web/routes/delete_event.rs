use actix_web::{delete, web, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::ErrorResponse;
use crate::event::application::domain::entities::EventId;
use crate::event::application::ports::incoming::use_cases::DeleteEventError;
use crate::shared::api::ApiResponse;
use crate::user::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::AppState;

/// Soft-delete an event (owner only)
#[utoipa::path(
    delete,
    path = "/api/events/{id}",
    tag = "events",
    params(("id" = i32, Path, description = "Event id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not the owner", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/events/{id}")]
pub async fn delete_event_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let event_id = EventId::from(path.into_inner());

    match data.event.delete.execute(user.user_id, event_id).await {
        Ok(()) => {
            info!(event_id = %event_id, user_id = %user.user_id, "Event deleted");
            ApiResponse::no_content()
        }
        Err(DeleteEventError::EventNotFound) => {
            warn!(event_id = %event_id, "Delete requested for missing event");
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }
        Err(DeleteEventError::Forbidden) => {
            warn!(event_id = %event_id, user_id = %user.user_id, "Event delete denied");
            ApiResponse::forbidden("FORBIDDEN", "Only the owner can delete this event")
        }
        Err(e) => {
            error!(event_id = %event_id, error = %e, "Event deletion failed");
            ApiResponse::internal_error()
        }
    }
}
