use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::group::application::domain::entities::{GroupId, GroupMember};
use crate::group::application::ports::incoming::use_cases::JoinGroupError;
use crate::shared::api::ApiResponse;
use crate::user::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::AppState;

/// Join a group as a member
#[utoipa::path(
    post,
    path = "/api/groups/{id}/join",
    tag = "groups",
    params(("id" = i32, Path, description = "Group id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Joined", body = inline(SuccessResponse<GroupMember>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 409, description = "Already a member", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/groups/{id}/join")]
pub async fn join_group_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let group_id = GroupId::from(path.into_inner());

    match data.group.join.execute(user.user_id, group_id).await {
        Ok(member) => {
            info!(group_id = %group_id, user_id = %user.user_id, "Joined group");
            ApiResponse::created(member)
        }
        Err(JoinGroupError::GroupNotFound) => {
            warn!(group_id = %group_id, "Join requested for missing group");
            ApiResponse::not_found("GROUP_NOT_FOUND", "Group not found")
        }
        Err(JoinGroupError::AlreadyMember) => {
            warn!(group_id = %group_id, user_id = %user.user_id, "Duplicate join");
            ApiResponse::conflict("ALREADY_MEMBER", "User is already a member of this group")
        }
        Err(e) => {
            error!(group_id = %group_id, error = %e, "Join failed");
            ApiResponse::internal_error()
        }
    }
}
