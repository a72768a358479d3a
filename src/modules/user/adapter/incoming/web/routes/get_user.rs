use actix_web::{get, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::user::application::domain::entities::{User, UserId};
use crate::user::application::ports::incoming::use_cases::GetUserError;
use crate::AppState;

/// Fetch a user by id
///
/// Soft-deleted users are still returned, flagged with `is_deleted`.
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = inline(SuccessResponse<User>)),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/users/{id}")]
pub async fn get_user_handler(path: web::Path<i32>, data: web::Data<AppState>) -> impl Responder {
    let user_id = UserId::from(path.into_inner());

    match data.user.get.execute(user_id).await {
        Ok(user) => ApiResponse::success(user),
        Err(GetUserError::UserNotFound) => {
            warn!(user_id = %user_id, "User not found");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(e) => {
            error!(user_id = %user_id, error = %e, "Failed to fetch user");
            ApiResponse::internal_error()
        }
    }
}
