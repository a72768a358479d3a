use actix_web::{get, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::group::application::domain::entities::{GroupDetails, GroupId};
use crate::group::application::ports::incoming::use_cases::GetGroupError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Fetch a group with its members and tags
///
/// Soft-deleted groups are still returned, flagged with `is_deleted`.
#[utoipa::path(
    get,
    path = "/api/groups/{id}",
    tag = "groups",
    params(("id" = i32, Path, description = "Group id")),
    responses(
        (status = 200, description = "Group found", body = inline(SuccessResponse<GroupDetails>)),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/groups/{id}")]
pub async fn get_group_handler(path: web::Path<i32>, data: web::Data<AppState>) -> impl Responder {
    let group_id = GroupId::from(path.into_inner());

    match data.group.get.execute(group_id).await {
        Ok(details) => ApiResponse::success(details),
        Err(GetGroupError::GroupNotFound) => {
            warn!(group_id = %group_id, "Group not found");
            ApiResponse::not_found("GROUP_NOT_FOUND", "Group not found")
        }
        Err(e) => {
            error!(group_id = %group_id, error = %e, "Failed to fetch group");
            ApiResponse::internal_error()
        }
    }
}
