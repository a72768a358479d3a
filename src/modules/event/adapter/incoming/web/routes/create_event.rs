use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse, ValidationErrorResponse};
use crate::event::application::domain::entities::Event;
use crate::event::application::ports::incoming::use_cases::{
    AttendeeForm, CreateEventCommand, CreateEventError, CreateEventForm, LocationForm,
};
use crate::shared::api::ApiResponse;
use crate::user::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::AppState;

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct LocationRequest {
    #[schema(example = "1 Lake Rd")]
    pub address: String,
    #[schema(example = "Springfield")]
    pub city: String,
    pub state: Option<String>,
    #[schema(example = "US")]
    pub country: String,
    #[schema(example = 44.05)]
    pub latitude: Option<f64>,
    #[schema(example = -123.09)]
    pub longitude: Option<f64>,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct AttendeeRequest {
    #[schema(example = "bob")]
    pub username: String,
    /// organizer, speaker or participant (default)
    #[schema(example = "speaker")]
    pub role: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateEventRequest {
    #[schema(example = "Morning Run")]
    pub title: String,
    pub description: Option<String>,
    /// RFC 3339, or a naive date/datetime read as UTC
    #[schema(example = "2024-06-01T07:00:00Z")]
    pub start_date: String,
    pub end_date: Option<String>,
    #[schema(example = "in person")]
    pub mode: String,
    pub group_id: Option<i32>,
    pub location: LocationRequest,
    /// Extra attendees; the caller is always added as organizer
    pub attendees: Vec<AttendeeRequest>,
    #[schema(example = json!([1]))]
    pub tags: Vec<i32>,
}

impl From<CreateEventRequest> for CreateEventForm {
    fn from(req: CreateEventRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
            start_date: req.start_date,
            end_date: req.end_date,
            mode: req.mode,
            group_id: req.group_id,
            location: LocationForm {
                address: req.location.address,
                city: req.location.city,
                state: req.location.state,
                country: req.location.country,
                latitude: req.location.latitude,
                longitude: req.location.longitude,
            },
            attendees: req
                .attendees
                .into_iter()
                .map(|a| AttendeeForm {
                    username: a.username,
                    role: a.role,
                })
                .collect(),
            tags: req.tags,
        }
    }
}

/// Create an event owned by the caller
#[utoipa::path(
    post,
    path = "/api/events",
    tag = "events",
    request_body = CreateEventRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Event created", body = inline(SuccessResponse<Event>)),
        (status = 401, description = "Missing or invalid token, or deleted account", body = ErrorResponse),
        (status = 404, description = "Referenced group or user vanished", body = ErrorResponse),
        (status = 409, description = "Attendee added concurrently", body = ErrorResponse),
        (status = 422, description = "Invalid form", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/events")]
pub async fn create_event_handler(
    user: AuthenticatedUser,
    req: web::Json<CreateEventRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CreateEventCommand::new(req.into_inner().into()) {
        Ok(command) => command,
        Err(fields) => {
            warn!(user_id = %user.user_id, errors = %fields, "Event form rejected");
            return ApiResponse::validation_failed(fields);
        }
    };

    match data.event.create.execute(user.user_id, command).await {
        Ok(event) => {
            info!(event_id = %event.id, owner_id = %user.user_id, "Event created");
            ApiResponse::created(event)
        }
        Err(CreateEventError::Validation(fields)) => {
            warn!(user_id = %user.user_id, errors = %fields, "Event form rejected");
            ApiResponse::validation_failed(fields)
        }
        Err(CreateEventError::DuplicateAttendee) => {
            warn!(user_id = %user.user_id, "Attendee list conflicted on insert");
            ApiResponse::conflict("ALREADY_ATTENDING", "An attendee is listed twice")
        }
        Err(CreateEventError::OwnerNotFound) => {
            warn!(user_id = %user.user_id, "Token belongs to a deleted account");
            ApiResponse::unauthorized("ACCOUNT_NOT_FOUND", "Account no longer exists")
        }
        Err(CreateEventError::ReferenceNotFound) => {
            warn!(user_id = %user.user_id, "Event reference vanished during insert");
            ApiResponse::not_found(
                "REFERENCE_NOT_FOUND",
                "A referenced group or user no longer exists",
            )
        }
        Err(e) => {
            error!(user_id = %user.user_id, error = %e, "Event creation failed");
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

    use crate::event::application::ports::incoming::use_cases::CreateEventUseCase;
    use crate::shared::validation::FieldErrors;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_header, test_token_provider};
    use crate::tests::support::fixtures::sample_event;
    use crate::user::application::domain::entities::UserId;

    struct MockCreateEvent(Result<Event, CreateEventError>);

    #[async_trait]
    impl CreateEventUseCase for MockCreateEvent {
        async fn execute(
            &self,
            _owner_id: UserId,
            _command: CreateEventCommand,
        ) -> Result<Event, CreateEventError> {
            self.0.clone()
        }
    }

    fn valid_body() -> serde_json::Value {
        json!({
            "title": "Morning Run",
            "start_date": "2024-06-01T07:00:00Z",
            "mode": "in person",
            "location": { "address": "1 Lake Rd", "city": "Springfield", "country": "US" },
            "attendees": [{ "username": "bob", "role": "speaker" }]
        })
    }

    async fn call(uc: MockCreateEvent, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default().with_create_event(uc).build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(test_token_provider()))
                .service(create_event_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/events")
            .insert_header(bearer_header(10))
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn creates_event() {
        let (status, body) = call(
            MockCreateEvent(Ok(sample_event(1, "Morning Run", 10))),
            valid_body(),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["title"], "Morning Run");
        assert_eq!(body["data"]["owner_id"], 10);
    }

    #[actix_web::test]
    async fn deleted_owner_is_unauthorized() {
        let (status, body) = call(MockCreateEvent(Err(CreateEventError::OwnerNotFound)), valid_body()).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["code"], "ACCOUNT_NOT_FOUND");
    }

    #[actix_web::test]
    async fn vanished_reference_is_not_found() {
        let (status, body) = call(
            MockCreateEvent(Err(CreateEventError::ReferenceNotFound)),
            valid_body(),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "REFERENCE_NOT_FOUND");
    }

    #[actix_web::test]
    async fn start_after_end_is_field_error() {
        let mut body = valid_body();
        body["start_date"] = json!("2024-06-02");
        body["end_date"] = json!("2024-06-01");

        let (status, body) = call(
            MockCreateEvent(Ok(sample_event(1, "Morning Run", 10))),
            body,
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["error"]["fields"]["start_date"][0],
            "Start date cannot be greater than end date."
        );
    }

    #[actix_web::test]
    async fn nested_errors_use_dotted_keys() {
        let (status, body) = call(
            MockCreateEvent(Ok(sample_event(1, "Morning Run", 10))),
            json!({
                "title": "Morning Run",
                "start_date": "2024-06-01",
                "mode": "in person",
                "location": { "city": "Springfield", "country": "US" },
                "attendees": [{ "username": "bob", "role": "host" }]
            }),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"]["fields"]["location.address"].is_array());
        assert!(body["error"]["fields"]["attendees[0].role"].is_array());
    }

    #[actix_web::test]
    async fn unknown_attendee_from_service_is_field_error() {
        let mut fields = FieldErrors::new();
        fields.add("attendees[0].username", "User 'bob' does not exist.");

        let (status, body) = call(
            MockCreateEvent(Err(CreateEventError::Validation(fields))),
            valid_body(),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body["error"]["fields"]["attendees[0].username"][0],
            "User 'bob' does not exist."
        );
    }
}
