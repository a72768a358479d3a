use actix_web::{put, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse, ValidationErrorResponse};
use crate::event::application::domain::entities::EventId;
use crate::event::application::ports::incoming::use_cases::SetEventTagsError;
use crate::shared::api::ApiResponse;
use crate::tag::application::domain::entities::Tag;
use crate::user::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct SetEventTagsRequest {
    /// Replaces the current set; an empty list clears it
    #[schema(example = json!([1, 3]))]
    pub tags: Vec<i32>,
}

/// Replace an event's tags (owner or organizer)
#[utoipa::path(
    put,
    path = "/api/events/{id}/tags",
    tag = "events",
    params(("id" = i32, Path, description = "Event id")),
    request_body = SetEventTagsRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current tags", body = inline(SuccessResponse<Vec<Tag>>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller cannot manage this event", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 422, description = "Unknown tag ids", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[put("/api/events/{id}/tags")]
pub async fn set_event_tags_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    req: web::Json<SetEventTagsRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let event_id = EventId::from(path.into_inner());
    let tag_ids = req.into_inner().tags;

    match data.event.set_tags.execute(user.user_id, event_id, tag_ids).await {
        Ok(tags) => {
            info!(event_id = %event_id, count = tags.len(), "Event tags set");
            ApiResponse::success(tags)
        }
        Err(SetEventTagsError::Validation(fields)) => {
            warn!(event_id = %event_id, errors = %fields, "Tag update rejected");
            ApiResponse::validation_failed(fields)
        }
        Err(SetEventTagsError::EventNotFound) => {
            warn!(event_id = %event_id, "Tag update on missing event");
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }
        Err(SetEventTagsError::Forbidden) => {
            warn!(event_id = %event_id, actor = %user.user_id, "Tag update denied");
            ApiResponse::forbidden("FORBIDDEN", "Only the owner or an organizer can change tags")
        }
        Err(e) => {
            error!(event_id = %event_id, error = %e, "Tag update failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::json;

    use crate::event::application::ports::incoming::use_cases::SetEventTagsUseCase;
    use crate::shared::validation::FieldErrors;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_header, test_token_provider};
    use crate::tests::support::fixtures::sample_tag;
    use crate::user::application::domain::entities::UserId;

    struct MockSetEventTags(Result<Vec<Tag>, SetEventTagsError>);

    #[async_trait]
    impl SetEventTagsUseCase for MockSetEventTags {
        async fn execute(
            &self,
            _actor: UserId,
            _event_id: EventId,
            _tag_ids: Vec<i32>,
        ) -> Result<Vec<Tag>, SetEventTagsError> {
            self.0.clone()
        }
    }

    async fn call(uc: MockSetEventTags) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default()
            .with_set_event_tags(uc)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(test_token_provider()))
                .service(set_event_tags_handler),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/events/1/tags")
            .insert_header(bearer_header(10))
            .set_json(json!({ "tags": [1] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn returns_current_tags() {
        let (status, body) = call(MockSetEventTags(Ok(vec![sample_tag(1, "outdoors")]))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"][0]["name"], "outdoors");
    }

    #[actix_web::test]
    async fn unknown_tag_is_field_error() {
        let mut fields = FieldErrors::new();
        fields.add("tags", "Unknown tag id 1.");

        let (status, body) =
            call(MockSetEventTags(Err(SetEventTagsError::Validation(fields)))).await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["fields"]["tags"][0], "Unknown tag id 1.");
    }

    #[actix_web::test]
    async fn speaker_is_forbidden() {
        let (status, _) = call(MockSetEventTags(Err(SetEventTagsError::Forbidden))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}
