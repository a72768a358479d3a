use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse, ValidationErrorResponse};
use crate::group::application::domain::entities::{GroupId, GroupMember};
use crate::group::application::ports::incoming::use_cases::{
    ChangeMemberRoleCommand, ChangeMemberRoleError,
};
use crate::shared::api::ApiResponse;
use crate::user::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::user::application::domain::entities::UserId;
use crate::AppState;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ChangeMemberRoleRequest {
    /// `admin` or `member`
    #[schema(example = "admin")]
    pub role: String,
}

/// Change a member's role (owner or admin)
#[utoipa::path(
    patch,
    path = "/api/groups/{id}/members/{user_id}",
    tag = "groups",
    params(
        ("id" = i32, Path, description = "Group id"),
        ("user_id" = i32, Path, description = "Member's user id"),
    ),
    request_body = ChangeMemberRoleRequest,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Role changed", body = inline(SuccessResponse<GroupMember>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Not permitted, or target is the owner", body = ErrorResponse),
        (status = 404, description = "Group or membership not found", body = ErrorResponse),
        (status = 422, description = "Invalid role", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[patch("/api/groups/{id}/members/{user_id}")]
pub async fn change_member_role_handler(
    user: AuthenticatedUser,
    path: web::Path<(i32, i32)>,
    req: web::Json<ChangeMemberRoleRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (group_id, member_id) = path.into_inner();
    let group_id = GroupId::from(group_id);
    let member_id = UserId::from(member_id);

    let command = match ChangeMemberRoleCommand::new(&req.role) {
        Ok(command) => command,
        Err(fields) => {
            warn!(group_id = %group_id, errors = %fields, "Role change rejected");
            return ApiResponse::validation_failed(fields);
        }
    };

    match data
        .group
        .change_member_role
        .execute(user.user_id, group_id, member_id, command)
        .await
    {
        Ok(member) => {
            info!(
                group_id = %group_id,
                user_id = %member_id,
                role = member.role.as_str(),
                "Role changed"
            );
            ApiResponse::success(member)
        }
        Err(ChangeMemberRoleError::GroupNotFound) => {
            warn!(group_id = %group_id, "Role change on missing group");
            ApiResponse::not_found("GROUP_NOT_FOUND", "Group not found")
        }
        Err(ChangeMemberRoleError::MembershipNotFound) => {
            warn!(group_id = %group_id, user_id = %member_id, "Membership not found");
            ApiResponse::not_found("MEMBERSHIP_NOT_FOUND", "User is not a member of this group")
        }
        Err(ChangeMemberRoleError::Forbidden) => {
            warn!(group_id = %group_id, actor = %user.user_id, "Role change denied");
            ApiResponse::forbidden("FORBIDDEN", "Only the owner or an admin can change roles")
        }
        Err(ChangeMemberRoleError::CannotChangeOwner) => {
            warn!(group_id = %group_id, "Attempt to change owner role");
            ApiResponse::forbidden("CANNOT_CHANGE_OWNER", "The owner's role cannot be changed")
        }
        Err(e) => {
            error!(group_id = %group_id, error = %e, "Role change failed");
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

    use crate::group::application::domain::entities::GroupRole;
    use crate::group::application::ports::incoming::use_cases::ChangeMemberRoleUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_header, test_token_provider};
    use crate::tests::support::fixtures::sample_member;

    struct MockChangeRole(Result<GroupMember, ChangeMemberRoleError>);

    #[async_trait]
    impl ChangeMemberRoleUseCase for MockChangeRole {
        async fn execute(
            &self,
            _actor: UserId,
            _group_id: GroupId,
            _member_id: UserId,
            _command: ChangeMemberRoleCommand,
        ) -> Result<GroupMember, ChangeMemberRoleError> {
            self.0.clone()
        }
    }

    async fn call(uc: MockChangeRole, role: &str) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default()
            .with_change_member_role(uc)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(test_token_provider()))
                .service(change_member_role_handler),
        )
        .await;

        let req = test::TestRequest::patch()
            .uri("/api/groups/1/members/11")
            .insert_header(bearer_header(10))
            .set_json(json!({ "role": role }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn promotes_member() {
        let (status, body) = call(
            MockChangeRole(Ok(sample_member(1, 11, GroupRole::Admin))),
            "admin",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["role"], "admin");
    }

    #[actix_web::test]
    async fn unknown_role_is_field_error() {
        let (status, body) = call(
            MockChangeRole(Ok(sample_member(1, 11, GroupRole::Admin))),
            "superuser",
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body["error"]["fields"]["role"].is_array());
    }

    #[actix_web::test]
    async fn owner_role_change_is_forbidden() {
        let (status, body) = call(
            MockChangeRole(Err(ChangeMemberRoleError::CannotChangeOwner)),
            "member",
        )
        .await;

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["code"], "CANNOT_CHANGE_OWNER");
    }
}
