use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::event::application::domain::entities::Event;
use crate::group::application::domain::entities::GroupId;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListEventsQuery {
    /// Only events of this group
    pub group_id: Option<i32>,
}

/// List events that are not soft-deleted
#[utoipa::path(
    get,
    path = "/api/events",
    tag = "events",
    params(ListEventsQuery),
    responses(
        (status = 200, description = "Active events", body = inline(SuccessResponse<Vec<Event>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/events")]
pub async fn list_events_handler(
    query: web::Query<ListEventsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let group_id = query.group_id.map(GroupId::from);

    match data.event.list.execute(group_id).await {
        Ok(events) => ApiResponse::success(events),
        Err(e) => {
            error!(error = %e, "Failed to list events");
            ApiResponse::internal_error()
        }
    }
}
