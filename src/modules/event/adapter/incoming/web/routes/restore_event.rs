use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::event::application::domain::entities::{Event, EventId};
use crate::event::application::ports::incoming::use_cases::RestoreEventError;
use crate::shared::api::ApiResponse;
use crate::user::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::AppState;

/// Undo a soft delete (owner only)
#[utoipa::path(
    post,
    path = "/api/events/{id}/restore",
    tag = "events",
    params(("id" = i32, Path, description = "Event id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Event restored", body = inline(SuccessResponse<Event>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not the owner", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/events/{id}/restore")]
pub async fn restore_event_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let event_id = EventId::from(path.into_inner());

    match data.event.restore.execute(user.user_id, event_id).await {
        Ok(event) => {
            info!(event_id = %event_id, "Event restored");
            ApiResponse::success(event)
        }
        Err(RestoreEventError::EventNotFound) => {
            warn!(event_id = %event_id, "Restore requested for missing event");
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }
        Err(RestoreEventError::Forbidden) => {
            warn!(event_id = %event_id, user_id = %user.user_id, "Event restore denied");
            ApiResponse::forbidden("FORBIDDEN", "Only the owner can restore this event")
        }
        Err(e) => {
            error!(event_id = %event_id, error = %e, "Event restore failed");
            ApiResponse::internal_error()
        }
    }
}
