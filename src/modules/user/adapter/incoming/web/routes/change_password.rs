use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, ValidationErrorResponse};
use crate::shared::api::ApiResponse;
use crate::user::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::user::application::ports::incoming::use_cases::{
    ChangePasswordCommand, ChangePasswordError,
};
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Change the caller's password
#[utoipa::path(
    put,
    path = "/api/users/me/password",
    tag = "users",
    request_body = ChangePasswordRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Password changed"),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 422, description = "Invalid form or wrong current password", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/users/me/password")]
pub async fn change_password_handler(
    user: AuthenticatedUser,
    req: web::Json<ChangePasswordRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match ChangePasswordCommand::new(
        &req.current_password,
        &req.new_password,
        &req.confirm_password,
    ) {
        Ok(command) => command,
        Err(fields) => return ApiResponse::validation_failed(fields),
    };

    match data.user.change_password.execute(user.user_id, command).await {
        Ok(()) => {
            info!(user_id = %user.user_id, "Password changed");
            ApiResponse::no_content()
        }
        Err(ChangePasswordError::Validation(fields)) => {
            warn!(user_id = %user.user_id, errors = %fields, "Password change rejected");
            ApiResponse::validation_failed(fields)
        }
        Err(ChangePasswordError::UserNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Password change failed");
            ApiResponse::internal_error()
        }
    }
}
