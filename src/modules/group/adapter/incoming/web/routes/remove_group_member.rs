use actix_web::{delete, web, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::ErrorResponse;
use crate::group::application::domain::entities::GroupId;
use crate::group::application::ports::incoming::use_cases::RemoveGroupMemberError;
use crate::shared::api::ApiResponse;
use crate::user::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::user::application::domain::entities::UserId;
use crate::AppState;

/// Remove a member from a group
///
/// Members may remove themselves; removing anyone else takes the owner or an
/// admin. The owner's membership cannot be removed.
#[utoipa::path(
    delete,
    path = "/api/groups/{id}/members/{user_id}",
    tag = "groups",
    params(
        ("id" = i32, Path, description = "Group id"),
        ("user_id" = i32, Path, description = "Member's user id"),
    ),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Member removed"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not permitted, or target is the owner", body = ErrorResponse),
        (status = 404, description = "Group or membership not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[delete("/api/groups/{id}/members/{user_id}")]
pub async fn remove_group_member_handler(
    user: AuthenticatedUser,
    path: web::Path<(i32, i32)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (group_id, member_id) = path.into_inner();
    let group_id = GroupId::from(group_id);
    let member_id = UserId::from(member_id);

    match data
        .group
        .remove_member
        .execute(user.user_id, group_id, member_id)
        .await
    {
        Ok(()) => {
            info!(group_id = %group_id, user_id = %member_id, "Member removed");
            ApiResponse::no_content()
        }
        Err(RemoveGroupMemberError::GroupNotFound) => {
            warn!(group_id = %group_id, "Member removal on missing group");
            ApiResponse::not_found("GROUP_NOT_FOUND", "Group not found")
        }
        Err(RemoveGroupMemberError::MembershipNotFound) => {
            warn!(group_id = %group_id, user_id = %member_id, "Membership not found");
            ApiResponse::not_found("MEMBERSHIP_NOT_FOUND", "User is not a member of this group")
        }
        Err(RemoveGroupMemberError::Forbidden) => {
            warn!(group_id = %group_id, actor = %user.user_id, "Member removal denied");
            ApiResponse::forbidden("FORBIDDEN", "Only the owner or an admin can remove members")
        }
        Err(RemoveGroupMemberError::CannotRemoveOwner) => {
            warn!(group_id = %group_id, "Attempt to remove group owner");
            ApiResponse::forbidden("CANNOT_REMOVE_OWNER", "The group owner cannot be removed")
        }
        Err(e) => {
            error!(group_id = %group_id, error = %e, "Member removal failed");
            ApiResponse::internal_error()
        }
    }
}
