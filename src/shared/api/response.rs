use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

use crate::shared::validation::FieldErrors;

/// JSON envelope shared by every endpoint.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Serialize, Clone)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    /// Field-scoped messages, present only for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldErrors>,
}

impl ApiError {
    fn new(code: &str, message: &str) -> Self {
        Self {
            code: code.to_owned(),
            message: message.to_owned(),
            fields: None,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    fn ok_with(status: StatusCode, data: T) -> HttpResponse {
        HttpResponse::build(status).json(Self {
            success: true,
            data: Some(data),
            error: None,
        })
    }

    pub fn success(data: T) -> HttpResponse {
        Self::ok_with(StatusCode::OK, data)
    }

    pub fn created(data: T) -> HttpResponse {
        Self::ok_with(StatusCode::CREATED, data)
    }
}

impl ApiResponse<()> {
    fn failure(status: StatusCode, error: ApiError) -> HttpResponse {
        HttpResponse::build(status).json(Self {
            success: false,
            data: None,
            error: Some(error),
        })
    }

    pub fn no_content() -> HttpResponse {
        HttpResponse::NoContent().finish()
    }

    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        Self::failure(status, ApiError::new(code, message))
    }

    pub fn validation_failed(fields: FieldErrors) -> HttpResponse {
        let error = ApiError {
            fields: Some(fields),
            ..ApiError::new("VALIDATION_ERROR", "One or more fields are invalid")
        };
        Self::failure(StatusCode::UNPROCESSABLE_ENTITY, error)
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn forbidden(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::FORBIDDEN, code, message)
    }

    pub fn unauthorized(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::UNAUTHORIZED, code, message)
    }

    pub fn conflict(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::CONFLICT, code, message)
    }

    /// Details stay in the logs; clients get a fixed message.
    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}
