use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse, ValidationErrorResponse};
use crate::shared::api::ApiResponse;
use crate::tag::application::domain::entities::Tag;
use crate::tag::application::ports::incoming::use_cases::{CreateTagCommand, CreateTagError};
use crate::user::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateTagRequest {
    #[schema(example = "outdoors")]
    pub name: String,
}

/// Create a tag
#[utoipa::path(
    post,
    path = "/api/tags",
    tag = "tags",
    request_body = CreateTagRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Tag created", body = inline(SuccessResponse<Tag>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 409, description = "Name taken concurrently", body = ErrorResponse),
        (status = 422, description = "Invalid or unavailable name", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/tags")]
pub async fn create_tag_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateTagRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateTagCommand::new(&req.name) {
        Ok(command) => command,
        Err(fields) => return ApiResponse::validation_failed(fields),
    };

    match data.tag.create.execute(command).await {
        Ok(tag) => ApiResponse::created(tag),
        Err(CreateTagError::Validation(fields)) => {
            warn!(user_id = %user.user_id, errors = %fields, "Tag rejected");
            ApiResponse::validation_failed(fields)
        }
        Err(CreateTagError::TagAlreadyExists) => {
            warn!(user_id = %user.user_id, name = %req.name, "Tag created concurrently");
            ApiResponse::conflict("TAG_ALREADY_EXISTS", "Tag already exists")
        }
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Tag creation failed");
            ApiResponse::internal_error()
        }
    }
}
