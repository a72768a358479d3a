use actix_web::{post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse, ValidationErrorResponse};
use crate::shared::api::ApiResponse;
use crate::user::application::domain::entities::User;
use crate::user::application::ports::incoming::use_cases::{
    SignUpCommand, SignUpError, SignUpForm,
};
use crate::AppState;

/// Sign-up form. Missing fields are reported as validation errors.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct SignUpRequest {
    #[schema(example = "alice")]
    pub username: String,
    #[schema(example = "Alice")]
    pub first_name: String,
    #[schema(example = "Liddell")]
    pub last_name: String,
    #[schema(example = "alice@x.com")]
    pub email: String,
    #[schema(example = "longpass1")]
    pub password: String,
    #[schema(example = "longpass1")]
    pub confirm_password: String,
    pub bio: Option<String>,
}

impl From<SignUpRequest> for SignUpForm {
    fn from(req: SignUpRequest) -> Self {
        SignUpForm {
            username: req.username,
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            password: req.password,
            confirm_password: req.confirm_password,
            bio: req.bio,
        }
    }
}

fn map_sign_up_error(err: SignUpError, username: &str) -> HttpResponse {
    match err {
        SignUpError::Validation(fields) => {
            warn!(username = %username, errors = %fields, "Sign-up rejected");
            ApiResponse::validation_failed(fields)
        }
        SignUpError::UserAlreadyExists => {
            warn!(username = %username, "Sign-up raced with an existing account");
            ApiResponse::conflict("USER_ALREADY_EXISTS", "User already exists")
        }
        other => {
            error!(username = %username, error = %other, "Sign-up failed");
            ApiResponse::internal_error()
        }
    }
}

/// Create an account
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = SignUpRequest,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<User>)),
        (status = 409, description = "Username or email taken concurrently", body = ErrorResponse),
        (status = 422, description = "Invalid form", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/users")]
pub async fn sign_up_handler(
    req: web::Json<SignUpRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let form: SignUpForm = req.into_inner().into();
    let username = form.username.clone();

    let command = match SignUpCommand::new(form) {
        Ok(command) => command,
        Err(fields) => return map_sign_up_error(SignUpError::Validation(fields), &username),
    };

    match data.user.sign_up.execute(command).await {
        Ok(user) => {
            info!(user_id = %user.id, username = %user.username, "Account created");
            ApiResponse::created(user)
        }
        Err(e) => map_sign_up_error(e, &username),
    }
}
