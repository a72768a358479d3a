use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse, ValidationErrorResponse};
use crate::group::application::domain::entities::{GroupId, GroupMember};
use crate::group::application::ports::incoming::use_cases::{
    AddGroupMemberCommand, AddGroupMemberError,
};
use crate::shared::api::ApiResponse;
use crate::user::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct AddGroupMemberRequest {
    #[schema(example = "bob")]
    pub username: String,
    /// `admin` or `member`; defaults to `member`
    #[schema(example = "member")]
    pub role: Option<String>,
}

/// Add a user to a group (owner or admin)
#[utoipa::path(
    post,
    path = "/api/groups/{id}/members",
    tag = "groups",
    params(("id" = i32, Path, description = "Group id")),
    request_body = AddGroupMemberRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Member added", body = inline(SuccessResponse<GroupMember>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller cannot manage members", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 409, description = "Already a member", body = ErrorResponse),
        (status = 422, description = "Unknown user or role", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/groups/{id}/members")]
pub async fn add_group_member_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    req: web::Json<AddGroupMemberRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let group_id = GroupId::from(path.into_inner());

    let command = match AddGroupMemberCommand::new(&req.username, req.role.as_deref()) {
        Ok(command) => command,
        Err(fields) => {
            warn!(group_id = %group_id, errors = %fields, "Member form rejected");
            return ApiResponse::validation_failed(fields);
        }
    };

    match data
        .group
        .add_member
        .execute(user.user_id, group_id, command)
        .await
    {
        Ok(member) => {
            info!(group_id = %group_id, user_id = %member.user_id, "Member added");
            ApiResponse::created(member)
        }
        Err(AddGroupMemberError::Validation(fields)) => {
            warn!(group_id = %group_id, errors = %fields, "Member form rejected");
            ApiResponse::validation_failed(fields)
        }
        Err(AddGroupMemberError::GroupNotFound) => {
            warn!(group_id = %group_id, "Member added to missing group");
            ApiResponse::not_found("GROUP_NOT_FOUND", "Group not found")
        }
        Err(AddGroupMemberError::Forbidden) => {
            warn!(group_id = %group_id, user_id = %user.user_id, "Member add denied");
            ApiResponse::forbidden("FORBIDDEN", "Only the owner or an admin can add members")
        }
        Err(AddGroupMemberError::AlreadyMember) => {
            warn!(group_id = %group_id, username = %req.username, "Duplicate membership");
            ApiResponse::conflict("ALREADY_MEMBER", "User is already a member of this group")
        }
        Err(e) => {
            error!(group_id = %group_id, error = %e, "Adding member failed");
            ApiResponse::internal_error()
        }
    }
}
