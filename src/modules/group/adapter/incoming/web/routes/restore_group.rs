use actix_web::{post, web, Responder};
use tracing::{error, info, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::group::application::domain::entities::{Group, GroupId};
use crate::group::application::ports::incoming::use_cases::RestoreGroupError;
use crate::shared::api::ApiResponse;
use crate::user::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::AppState;

/// Undo a soft delete (owner only)
#[utoipa::path(
    post,
    path = "/api/groups/{id}/restore",
    tag = "groups",
    params(("id" = i32, Path, description = "Group id")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Group restored", body = inline(SuccessResponse<Group>)),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 403, description = "Caller is not the owner", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/groups/{id}/restore")]
pub async fn restore_group_handler(
    user: AuthenticatedUser,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let group_id = GroupId::from(path.into_inner());

    match data.group.restore.execute(user.user_id, group_id).await {
        Ok(group) => {
            info!(group_id = %group_id, "Group restored");
            ApiResponse::success(group)
        }
        Err(RestoreGroupError::GroupNotFound) => {
            warn!(group_id = %group_id, "Restore requested for missing group");
            ApiResponse::not_found("GROUP_NOT_FOUND", "Group not found")
        }
        Err(RestoreGroupError::Forbidden) => {
            warn!(group_id = %group_id, user_id = %user.user_id, "Group restore denied");
            ApiResponse::forbidden("FORBIDDEN", "Only the owner can restore this group")
        }
        Err(e) => {
            error!(group_id = %group_id, error = %e, "Group restore failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;

    use crate::group::application::ports::incoming::use_cases::RestoreGroupUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{bearer_header, test_token_provider};
    use crate::tests::support::fixtures::sample_group;
    use crate::user::application::domain::entities::UserId;

    struct MockRestoreGroup(Result<Group, RestoreGroupError>);

    #[async_trait]
    impl RestoreGroupUseCase for MockRestoreGroup {
        async fn execute(
            &self,
            _actor: UserId,
            _group_id: GroupId,
        ) -> Result<Group, RestoreGroupError> {
            self.0.clone()
        }
    }

    async fn call(uc: MockRestoreGroup) -> (StatusCode, serde_json::Value) {
        let state = TestAppStateBuilder::default().with_restore_group(uc).build();
        let app = test::init_service(
            App::new()
                .app_data(state)
                .app_data(web::Data::new(test_token_provider()))
                .service(restore_group_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/groups/1/restore")
            .insert_header(bearer_header(10))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        (status, test::read_body_json(resp).await)
    }

    #[actix_web::test]
    async fn restored_group_is_returned() {
        let (status, body) = call(MockRestoreGroup(Ok(sample_group(1, "Runners", 10)))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["is_deleted"], false);
    }

    #[actix_web::test]
    async fn non_owner_is_forbidden() {
        let (status, _) = call(MockRestoreGroup(Err(RestoreGroupError::Forbidden))).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }
}
