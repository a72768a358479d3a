use actix_web::{delete, web, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::ErrorResponse;
use crate::shared::api::ApiResponse;
use crate::user::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::user::application::ports::incoming::use_cases::DeleteUserError;
use crate::AppState;

/// Delete the caller's account
///
/// Removes the account together with every group and event it owns and all
/// of its memberships and attendances.
#[utoipa::path(
    delete,
    path = "/api/users/me",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/users/me")]
pub async fn delete_user_handler(
    user: AuthenticatedUser,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.user.delete.execute(user.user_id).await {
        Ok(()) => {
            info!(user_id = %user.user_id, "Account deleted");
            ApiResponse::no_content()
        }
        Err(DeleteUserError::UserNotFound) => {
            warn!(user_id = %user.user_id, "Delete requested for missing user");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Account deletion failed");
            ApiResponse::internal_error()
        }
    }
}
