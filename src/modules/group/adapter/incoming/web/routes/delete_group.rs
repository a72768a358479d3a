use actix_web::{delete, web, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::ErrorResponse;
use crate::group::application::domain::entities::GroupId;
use crate::group::application::ports::incoming::use_cases::DeleteGroupError;
use crate::shared::api::ApiResponse;
use crate::user::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::AppState;

/// Soft-delete a group (owner only)
#[utoipa::path(
    delete,
    path = "/api/groups/{id}",
    tag = "groups",
    params(("id" = i32, Path, description = "Group id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Group deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not the owner", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/groups/{id}")]
pub async fn delete_group_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let group_id = GroupId::from(path.into_inner());

    match data.group.delete.execute(user.user_id, group_id).await {
        Ok(()) => {
            info!(group_id = %group_id, user_id = %user.user_id, "Group deleted");
            ApiResponse::no_content()
        }
        Err(DeleteGroupError::GroupNotFound) => {
            warn!(group_id = %group_id, "Delete requested for missing group");
            ApiResponse::not_found("GROUP_NOT_FOUND", "Group not found")
        }
        Err(DeleteGroupError::Forbidden) => {
            warn!(group_id = %group_id, user_id = %user.user_id, "Group delete denied");
            ApiResponse::forbidden("FORBIDDEN", "Only the owner can delete this group")
        }
        Err(e) => {
            error!(group_id = %group_id, error = %e, "Group deletion failed");
            ApiResponse::internal_error()
        }
    }
}
