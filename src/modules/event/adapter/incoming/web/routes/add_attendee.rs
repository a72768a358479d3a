use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse, ValidationErrorResponse};
use crate::event::application::domain::entities::{Attendee, EventId};
use crate::event::application::ports::incoming::use_cases::{
    AddAttendeeCommand, AddAttendeeError,
};
use crate::shared::api::ApiResponse;
use crate::user::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct AddAttendeeRequest {
    #[schema(example = "bob")]
    pub username: String,
    /// `organizer`, `speaker` or `participant`; defaults to `participant`
    #[schema(example = "participant")]
    pub role: Option<String>,
}

/// Add an attendee to an event
///
/// Any user may add themselves as a participant. Other additions take the
/// owner or an organizer.
#[utoipa::path(
    post,
    path = "/api/events/{id}/attendees",
    tag = "events",
    params(("id" = i32, Path, description = "Event id")),
    request_body = AddAttendeeRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Attendee added", body = inline(SuccessResponse<Attendee>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller cannot manage attendees", body = ErrorResponse),
        (status = 404, description = "Event not found", body = ErrorResponse),
        (status = 409, description = "Already attending", body = ErrorResponse),
        (status = 422, description = "Unknown user or role", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/events/{id}/attendees")]
pub async fn add_attendee_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    req: web::Json<AddAttendeeRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let event_id = EventId::from(path.into_inner());

    let command = match AddAttendeeCommand::new(&req.username, req.role.as_deref()) {
        Ok(command) => command,
        Err(fields) => {
            warn!(event_id = %event_id, errors = %fields, "Attendee form rejected");
            return ApiResponse::validation_failed(fields);
        }
    };

    match data
        .event
        .add_attendee
        .execute(user.user_id, event_id, command)
        .await
    {
        Ok(attendee) => {
            info!(event_id = %event_id, user_id = %attendee.user_id, "Attendee added");
            ApiResponse::created(attendee)
        }
        Err(AddAttendeeError::Validation(fields)) => {
            warn!(event_id = %event_id, errors = %fields, "Attendee form rejected");
            ApiResponse::validation_failed(fields)
        }
        Err(AddAttendeeError::EventNotFound) => {
            warn!(event_id = %event_id, "Attendee added to missing event");
            ApiResponse::not_found("EVENT_NOT_FOUND", "Event not found")
        }
        Err(AddAttendeeError::Forbidden) => {
            warn!(event_id = %event_id, user_id = %user.user_id, "Attendee add denied");
            ApiResponse::forbidden(
                "FORBIDDEN",
                "Only the owner or an organizer can add other attendees",
            )
        }
        Err(AddAttendeeError::AlreadyAttending) => {
            warn!(event_id = %event_id, username = %req.username, "Duplicate attendance");
            ApiResponse::conflict("ALREADY_ATTENDING", "User is already attending this event")
        }
        Err(e) => {
            error!(event_id = %event_id, error = %e, "Adding attendee failed");
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

    use crate::event::application::domain::entities::EventRole;
    use crate::event::application::ports::incoming::use_cases::AddAttendeeUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_header, test_token_provider};
    use crate::tests::support::fixtures::sample_attendee;
    use crate::user::application::domain::entities::UserId;

    struct MockAddAttendee(Result<Attendee, AddAttendeeError>);

    #[async_trait]
    impl AddAttendeeUseCase for MockAddAttendee {
        async fn execute(
            &self,
            _actor: UserId,
            _event_id: EventId,
            _command: AddAttendeeCommand,
        ) -> Result<Attendee, AddAttendeeError> {
            self.0.clone()
        }
    }

    async fn call(uc: MockAddAttendee, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default().with_add_attendee(uc).build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(test_token_provider()))
                .service(add_attendee_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/events/1/attendees")
            .insert_header(bearer_header(11))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn attendee_added() {
        let (status, body) = call(
            MockAddAttendee(Ok(sample_attendee(1, 11, EventRole::Participant))),
            json!({ "username": "bob" }),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["role"], "participant");
        assert_eq!(body["data"]["user_id"], 11);
    }

    #[actix_web::test]
    async fn bad_role_is_field_error() {
        let (status, body) = call(
            MockAddAttendee(Ok(sample_attendee(1, 11, EventRole::Participant))),
            json!({ "username": "bob", "role": "host" }),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["error"]["fields"]["role"][0],
            "Role must be one of: organizer, speaker, participant."
        );
    }

    #[actix_web::test]
    async fn duplicate_attendance_is_conflict() {
        let (status, body) = call(
            MockAddAttendee(Err(AddAttendeeError::AlreadyAttending)),
            json!({ "username": "bob" }),
        )
        .await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "ALREADY_ATTENDING");
    }

    #[actix_web::test]
    async fn forbidden_promotion() {
        let (status, _) = call(
            MockAddAttendee(Err(AddAttendeeError::Forbidden)),
            json!({ "username": "carol", "role": "speaker" }),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}
