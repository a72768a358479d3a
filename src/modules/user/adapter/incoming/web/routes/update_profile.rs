use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse, ValidationErrorResponse};
use crate::shared::api::ApiResponse;
use crate::user::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::user::application::domain::entities::User;
use crate::user::application::ports::incoming::use_cases::{
    UpdateProfileCommand, UpdateProfileError,
};
use crate::AppState;

/// Fields to change; omitted fields keep their value.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    #[schema(example = "Alice")]
    pub first_name: Option<String>,
    #[schema(example = "Liddell")]
    pub last_name: Option<String>,
    /// An empty bio resets it to "No bio"
    #[schema(example = "Runs at dawn")]
    pub bio: Option<String>,
}

/// Update the caller's profile
#[utoipa::path(
    patch,
    path = "/api/users/me",
    tag = "users",
    request_body = UpdateProfileRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Profile updated", body = inline(SuccessResponse<User>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 422, description = "Invalid form", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/api/users/me")]
pub async fn update_profile_handler(
    user: AuthenticatedUser,
    req: web::Json<UpdateProfileRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match UpdateProfileCommand::new(
        req.first_name.as_deref(),
        req.last_name.as_deref(),
        req.bio.as_deref(),
    ) {
        Ok(command) => command,
        Err(fields) => {
            warn!(user_id = %user.user_id, errors = %fields, "Profile update rejected");
            return ApiResponse::validation_failed(fields);
        }
    };

    match data.user.update_profile.execute(user.user_id, command).await {
        Ok(updated) => {
            info!(user_id = %user.user_id, "Profile updated");
            ApiResponse::success(updated)
        }
        Err(UpdateProfileError::UserNotFound) => {
            warn!(user_id = %user.user_id, "Profile update for missing user");
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}
