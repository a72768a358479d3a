use actix_web::{delete, web, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::ErrorResponse;
use crate::shared::api::ApiResponse;
use crate::tag::application::domain::entities::TagId;
use crate::tag::application::ports::incoming::use_cases::DeleteTagError;
use crate::user::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::AppState;

/// Soft-delete a tag
///
/// The tag disappears from listings and can no longer be attached; existing
/// links are kept.
#[utoipa::path(
    delete,
    path = "/api/tags/{id}",
    tag = "tags",
    params(("id" = i32, Path, description = "Tag id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Tag deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Tag not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/tags/{id}")]
pub async fn delete_tag_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let tag_id = TagId::from(path.into_inner());

    match data.tag.delete.execute(tag_id).await {
        Ok(()) => {
            info!(user_id = %user.user_id, tag_id = %tag_id, "Tag deleted");
            ApiResponse::no_content()
        }
        Err(DeleteTagError::TagNotFound) => {
            warn!(tag_id = %tag_id, "Delete requested for missing tag");
            ApiResponse::not_found("TAG_NOT_FOUND", "Tag not found")
        }
        Err(e) => {
            error!(tag_id = %tag_id, error = %e, "Tag deletion failed");
            ApiResponse::internal_error()
        }
    }
}
