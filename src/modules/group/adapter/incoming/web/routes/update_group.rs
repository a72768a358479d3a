use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse, ValidationErrorResponse};
use crate::group::application::domain::entities::{Group, GroupId};
use crate::group::application::ports::incoming::use_cases::{UpdateGroupCommand, UpdateGroupError};
use crate::shared::api::ApiResponse;
use crate::user::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::AppState;

/// Fields to change; omitted fields keep their value.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateGroupRequest {
    #[schema(example = "Lake Runners")]
    pub name: Option<String>,
    #[schema(example = "Weekend runs")]
    pub description: Option<String>,
}

/// Rename a group or change its description (owner or admin)
#[utoipa::path(
    patch,
    path = "/api/groups/{id}",
    tag = "groups",
    params(("id" = i32, Path, description = "Group id")),
    request_body = UpdateGroupRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Group updated", body = inline(SuccessResponse<Group>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller cannot manage this group", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 409, description = "Name taken concurrently", body = ErrorResponse),
        (status = 422, description = "Invalid form", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/api/groups/{id}")]
pub async fn update_group_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    req: web::Json<UpdateGroupRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let group_id = GroupId::from(path.into_inner());

    let command = match UpdateGroupCommand::new(req.name.as_deref(), req.description.as_deref()) {
        Ok(command) => command,
        Err(fields) => {
            warn!(group_id = %group_id, errors = %fields, "Group update rejected");
            return ApiResponse::validation_failed(fields);
        }
    };

    match data.group.update.execute(user.user_id, group_id, command).await {
        Ok(group) => {
            info!(group_id = %group_id, user_id = %user.user_id, "Group updated");
            ApiResponse::success(group)
        }
        Err(UpdateGroupError::Validation(fields)) => {
            warn!(group_id = %group_id, errors = %fields, "Group update rejected");
            ApiResponse::validation_failed(fields)
        }
        Err(UpdateGroupError::GroupNotFound) => {
            warn!(group_id = %group_id, "Update requested for missing group");
            ApiResponse::not_found("GROUP_NOT_FOUND", "Group not found")
        }
        Err(UpdateGroupError::Forbidden) => {
            warn!(group_id = %group_id, user_id = %user.user_id, "Group update denied");
            ApiResponse::forbidden("FORBIDDEN", "Only the owner or an admin can edit this group")
        }
        Err(UpdateGroupError::GroupAlreadyExists) => {
            warn!(group_id = %group_id, "Group name taken concurrently");
            ApiResponse::conflict("GROUP_ALREADY_EXISTS", "Group already exists")
        }
        Err(e) => {
            error!(group_id = %group_id, error = %e, "Group update failed");
            ApiResponse::internal_error()
        }
    }
}
