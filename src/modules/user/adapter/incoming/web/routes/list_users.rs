use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::user::application::domain::entities::User;
use crate::AppState;

/// List active users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    responses(
        (status = 200, description = "Active users ordered by username", body = inline(SuccessResponse<Vec<User>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/users")]
pub async fn list_users_handler(data: web::Data<AppState>) -> impl Responder {
    match data.user.list.execute().await {
        Ok(users) => ApiResponse::success(users),
        Err(e) => {
            error!(error = %e, "Failed to list users");
            ApiResponse::internal_error()
        }
    }
}
