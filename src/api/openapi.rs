use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::api::schemas::{
    ErrorDetail, ErrorResponse, ValidationErrorDetail, ValidationErrorResponse,
};
use crate::event::adapter::incoming::web::routes::{
    AddAttendeeRequest, AttendeeRequest, CreateEventRequest, LocationRequest, SetEventTagsRequest,
};
use crate::event::application::domain::entities::{
    Attendee, Event, EventDetails, EventRole, Location,
};
use crate::group::adapter::incoming::web::routes::{
    AddGroupMemberRequest, ChangeMemberRoleRequest, CreateGroupRequest, SetGroupTagsRequest,
    UpdateGroupRequest,
};
use crate::group::application::domain::entities::{Group, GroupDetails, GroupMember, GroupRole};
use crate::tag::adapter::incoming::web::routes::CreateTagRequest;
use crate::tag::application::domain::entities::Tag;
use crate::user::adapter::incoming::web::routes::{
    ChangePasswordRequest, LoginRequest, SignUpRequest, UpdateProfileRequest,
};
use crate::user::application::domain::entities::User;
use crate::user::application::ports::incoming::use_cases::AuthSession;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Gathering API",
        version = "1.0.0",
        description = "Users, groups, events, locations and tags for a community gathering service"
    ),
    paths(
        // Auth and users
        crate::user::adapter::incoming::web::routes::sign_up_handler,
        crate::user::adapter::incoming::web::routes::login_handler,
        crate::user::adapter::incoming::web::routes::list_users_handler,
        crate::user::adapter::incoming::web::routes::get_user_handler,
        crate::user::adapter::incoming::web::routes::update_profile_handler,
        crate::user::adapter::incoming::web::routes::change_password_handler,
        crate::user::adapter::incoming::web::routes::delete_user_handler,

        // Tags
        crate::tag::adapter::incoming::web::routes::create_tag_handler,
        crate::tag::adapter::incoming::web::routes::list_tags_handler,
        crate::tag::adapter::incoming::web::routes::delete_tag_handler,

        // Groups
        crate::group::adapter::incoming::web::routes::create_group_handler,
        crate::group::adapter::incoming::web::routes::list_groups_handler,
        crate::group::adapter::incoming::web::routes::get_group_handler,
        crate::group::adapter::incoming::web::routes::update_group_handler,
        crate::group::adapter::incoming::web::routes::delete_group_handler,
        crate::group::adapter::incoming::web::routes::restore_group_handler,
        crate::group::adapter::incoming::web::routes::join_group_handler,
        crate::group::adapter::incoming::web::routes::add_group_member_handler,
        crate::group::adapter::incoming::web::routes::remove_group_member_handler,
        crate::group::adapter::incoming::web::routes::change_member_role_handler,
        crate::group::adapter::incoming::web::routes::set_group_tags_handler,

        // Events
        crate::event::adapter::incoming::web::routes::create_event_handler,
        crate::event::adapter::incoming::web::routes::list_events_handler,
        crate::event::adapter::incoming::web::routes::get_event_handler,
        crate::event::adapter::incoming::web::routes::delete_event_handler,
        crate::event::adapter::incoming::web::routes::restore_event_handler,
        crate::event::adapter::incoming::web::routes::add_attendee_handler,
        crate::event::adapter::incoming::web::routes::remove_attendee_handler,
        crate::event::adapter::incoming::web::routes::set_event_tags_handler,
    ),
    components(
        schemas(
            // Response wrappers
            ErrorResponse,
            ErrorDetail,
            ValidationErrorResponse,
            ValidationErrorDetail,

            // Users
            SignUpRequest,
            LoginRequest,
            UpdateProfileRequest,
            ChangePasswordRequest,
            AuthSession,
            User,

            // Tags
            CreateTagRequest,
            Tag,

            // Groups
            CreateGroupRequest,
            UpdateGroupRequest,
            AddGroupMemberRequest,
            ChangeMemberRoleRequest,
            SetGroupTagsRequest,
            Group,
            GroupDetails,
            GroupMember,
            GroupRole,

            // Events
            CreateEventRequest,
            LocationRequest,
            AttendeeRequest,
            AddAttendeeRequest,
            SetEventTagsRequest,
            Event,
            EventDetails,
            Location,
            Attendee,
            EventRole
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Sign-up and login"),
        (name = "users", description = "User accounts"),
        (name = "tags", description = "Shared tag catalogue"),
        (name = "groups", description = "Groups and their members"),
        (name = "events", description = "Events, venues and attendees"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Token returned by POST /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
