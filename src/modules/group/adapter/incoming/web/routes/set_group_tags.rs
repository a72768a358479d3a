use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse, ValidationErrorResponse};
use crate::group::application::domain::entities::GroupId;
use crate::group::application::ports::incoming::use_cases::SetGroupTagsError;
use crate::shared::api::ApiResponse;
use crate::tag::application::domain::entities::Tag;
use crate::user::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct SetGroupTagsRequest {
    /// Replaces the current set; an empty list clears it
    #[schema(example = json!([1, 3]))]
    pub tags: Vec<i32>,
}

/// Replace a group's tags (owner or admin)
#[utoipa::path(
    put,
    path = "/api/groups/{id}/tags",
    tag = "groups",
    params(("id" = i32, Path, description = "Group id")),
    request_body = SetGroupTagsRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current tags", body = inline(SuccessResponse<Vec<Tag>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller cannot manage this group", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 422, description = "Unknown tag ids", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/groups/{id}/tags")]
pub async fn set_group_tags_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    req: web::Json<SetGroupTagsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let group_id = GroupId::from(path.into_inner());
    let tag_ids = req.into_inner().tags;

    match data.group.set_tags.execute(user.user_id, group_id, tag_ids).await {
        Ok(tags) => {
            info!(group_id = %group_id, count = tags.len(), "Group tags set");
            ApiResponse::success(tags)
        }
        Err(SetGroupTagsError::Validation(fields)) => {
            warn!(group_id = %group_id, errors = %fields, "Tag update rejected");
            ApiResponse::validation_failed(fields)
        }
        Err(SetGroupTagsError::GroupNotFound) => {
            warn!(group_id = %group_id, "Tag update on missing group");
            ApiResponse::not_found("GROUP_NOT_FOUND", "Group not found")
        }
        Err(SetGroupTagsError::Forbidden) => {
            warn!(group_id = %group_id, actor = %user.user_id, "Tag update denied");
            ApiResponse::forbidden("FORBIDDEN", "Only the owner or an admin can change tags")
        }
        Err(e) => {
            error!(group_id = %group_id, error = %e, "Tag update failed");
            ApiResponse::internal_error()
        }
    }
}
