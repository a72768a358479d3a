use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::shared::api::ApiResponse;
use crate::tag::application::domain::entities::Tag;
use crate::AppState;

/// List active tags
#[utoipa::path(
    get,
    path = "/api/tags",
    tag = "tags",
    responses(
        (status = 200, description = "Active tags ordered by name", body = inline(SuccessResponse<Vec<Tag>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/tags")]
pub async fn list_tags_handler(data: web::Data<AppState>) -> impl Responder {
    match data.tag.list.execute().await {
        Ok(tags) => ApiResponse::success(tags),
        Err(e) => {
            error!(error = %e, "Failed to list tags");
            ApiResponse::internal_error()
        }
    }
}
