use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::group::application::domain::entities::Group;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// List groups that are not soft-deleted
#[utoipa::path(
    get,
    path = "/api/groups",
    tag = "groups",
    responses(
        (status = 200, description = "Active groups", body = inline(SuccessResponse<Vec<Group>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/groups")]
pub async fn list_groups_handler(data: web::Data<AppState>) -> impl Responder {
    match data.group.list.execute().await {
        Ok(groups) => ApiResponse::success(groups),
        Err(e) => {
            error!(error = %e, "Failed to list groups");
            ApiResponse::internal_error()
        }
    }
}
