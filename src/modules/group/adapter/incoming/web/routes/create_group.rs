use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse, ValidationErrorResponse};
use crate::group::application::domain::entities::Group;
use crate::group::application::ports::incoming::use_cases::{
    CreateGroupCommand, CreateGroupError, CreateGroupForm,
};
use crate::shared::api::ApiResponse;
use crate::user::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateGroupRequest {
    #[schema(example = "Runners")]
    pub name: String,
    /// Defaults to "No description"
    #[schema(example = "Early morning runs around the lake")]
    pub description: Option<String>,
    /// Ids of active tags
    #[schema(example = json!([1, 2]))]
    pub tags: Vec<i32>,
}

impl From<CreateGroupRequest> for CreateGroupForm {
    fn from(req: CreateGroupRequest) -> Self {
        Self {
            name: req.name,
            description: req.description,
            tags: req.tags,
        }
    }
}

/// Create a group owned by the caller
#[utoipa::path(
    post,
    path = "/api/groups",
    tag = "groups",
    request_body = CreateGroupRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Group created", body = inline(SuccessResponse<Group>)),
        (status = 401, description = "Missing or invalid token, or deleted account", body = ErrorResponse),
        (status = 409, description = "Name taken concurrently", body = ErrorResponse),
        (status = 422, description = "Invalid form", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/groups")]
pub async fn create_group_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateGroupRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateGroupCommand::new(req.into_inner().into()) {
        Ok(command) => command,
        Err(fields) => {
            warn!(user_id = %user.user_id, errors = %fields, "Group form rejected");
            return ApiResponse::validation_failed(fields);
        }
    };

    match data.group.create.execute(user.user_id, command).await {
        Ok(group) => {
            info!(group_id = %group.id, owner_id = %user.user_id, "Group created");
            ApiResponse::created(group)
        }
        Err(CreateGroupError::Validation(fields)) => {
            warn!(user_id = %user.user_id, errors = %fields, "Group form rejected");
            ApiResponse::validation_failed(fields)
        }
        Err(CreateGroupError::GroupAlreadyExists) => {
            warn!(user_id = %user.user_id, "Group name taken concurrently");
            ApiResponse::conflict("GROUP_ALREADY_EXISTS", "Group already exists")
        }
        Err(CreateGroupError::OwnerNotFound) => {
            warn!(user_id = %user.user_id, "Token belongs to a deleted account");
            ApiResponse::unauthorized("ACCOUNT_NOT_FOUND", "Account no longer exists")
        }
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Group creation failed");
            ApiResponse::internal_error()
        }
    }
}
