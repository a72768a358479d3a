use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::web::JsonConfig;
use tracing::warn;

use crate::shared::api::ApiResponse;

/// Request bodies above this size are rejected before deserialization.
const MAX_JSON_BYTES: usize = 64 * 1024;

/// JSON extractor settings whose rejections use the `ApiResponse` envelope.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(MAX_JSON_BYTES)
        .error_handler(|err, req| {
            let message = err.to_string();
            warn!(path = %req.path(), error = %message, "Rejected JSON body");

            let response = match &err {
                JsonPayloadError::ContentType => ApiResponse::error(
                    StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    "UNSUPPORTED_CONTENT_TYPE",
                    "Expected an application/json body",
                ),
                JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
                    ApiResponse::error(
                        StatusCode::PAYLOAD_TOO_LARGE,
                        "PAYLOAD_TOO_LARGE",
                        &message,
                    )
                }
                _ => ApiResponse::bad_request("INVALID_JSON", &message),
            };
            InternalError::from_response(err, response).into()
        })
}
