use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse, ValidationErrorResponse};
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::{
    AuthSession, AuthenticateUserError, LoginCommand,
};
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct LoginRequest {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "longpass1")]
    pub password: String,
}

/// Exchange credentials for a bearer token
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Authenticated", body = inline(SuccessResponse<AuthSession>)),
        (status = 401, description = "Invalid username or password", body = ErrorResponse),
        (status = 422, description = "Missing username or password", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_handler(
    req: web::Json<LoginRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match LoginCommand::new(&req.username, &req.password) {
        Ok(command) => command,
        Err(fields) => return ApiResponse::validation_failed(fields),
    };

    match data.user.authenticate.execute(command).await {
        Ok(session) => {
            info!(user_id = %session.user.id, "User logged in");
            ApiResponse::success(session)
        }
        Err(AuthenticateUserError::InvalidCredentials) => {
            warn!(username = %req.username, "Login rejected");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }
        Err(e) => {
            error!(username = %req.username, error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
