pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::{event, group, tag, user};

use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::event::adapter::outgoing::{
    EventAttendeeRepositorySql, EventQuerySql, EventRepositorySql,
};
use crate::event::application::services::{
    AddAttendeeService, CreateEventService, DeleteEventService, GetEventService,
    ListEventsService, RemoveAttendeeService, RestoreEventService, SetEventTagsService,
};
use crate::event::application::EventUseCases;
use crate::group::adapter::outgoing::{
    GroupMemberRepositorySql, GroupQuerySql, GroupRepositorySql,
};
use crate::group::application::services::{
    AddGroupMemberService, ChangeMemberRoleService, CreateGroupService, DeleteGroupService,
    GetGroupService, JoinGroupService, ListGroupsService, RemoveGroupMemberService,
    RestoreGroupService, SetGroupTagsService, UpdateGroupService,
};
use crate::group::application::GroupUseCases;
use crate::shared::api::custom_json_config;
use crate::tag::adapter::outgoing::{TagQuerySql, TagRepositorySql};
use crate::tag::application::helpers::TagResolver;
use crate::tag::application::services::{CreateTagService, DeleteTagService, ListTagsService};
use crate::tag::application::TagUseCases;
use crate::user::adapter::outgoing::jwt::JwtTokenService;
use crate::user::adapter::outgoing::security::build_password_hasher;
use crate::user::adapter::outgoing::{UserQuerySql, UserRepositorySql};
use crate::user::application::helpers::UserIdentityResolver;
use crate::user::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::user::application::services::{
    AuthenticateUserService, ChangePasswordService, DeleteUserService, GetUserService,
    ListUsersService, SignUpService, UpdateProfileService,
};
use crate::user::application::UserUseCases;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub user: UserUseCases,
    pub group: GroupUseCases,
    pub event: EventUseCases,
    pub tag: TagUseCases,
}

/// Wires every SQL adapter and service against one connection pool.
pub fn build_app_state(
    db: Arc<DatabaseConnection>,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
) -> AppState {
    let user_query = UserQuerySql::new(Arc::clone(&db));
    let user_repo = UserRepositorySql::new(Arc::clone(&db));
    let tag_query = TagQuerySql::new(Arc::clone(&db));
    let tag_repo = TagRepositorySql::new(Arc::clone(&db));
    let group_query = GroupQuerySql::new(Arc::clone(&db));
    let group_repo = GroupRepositorySql::new(Arc::clone(&db));
    let group_members = GroupMemberRepositorySql::new(Arc::clone(&db));
    let event_query = EventQuerySql::new(Arc::clone(&db));
    let event_repo = EventRepositorySql::new(Arc::clone(&db));
    let event_attendees = EventAttendeeRepositorySql::new(Arc::clone(&db));

    let users = UserIdentityResolver::new(Arc::new(user_query.clone()));
    let tags = TagResolver::new(Arc::new(tag_query.clone()));

    let user = UserUseCases {
        sign_up: Arc::new(SignUpService::new(
            user_query.clone(),
            user_repo.clone(),
            Arc::clone(&hasher),
        )),
        authenticate: Arc::new(AuthenticateUserService::new(
            user_query.clone(),
            Arc::clone(&hasher),
            tokens,
        )),
        get: Arc::new(GetUserService::new(user_query.clone())),
        list: Arc::new(ListUsersService::new(user_query.clone())),
        update_profile: Arc::new(UpdateProfileService::new(user_repo.clone())),
        change_password: Arc::new(ChangePasswordService::new(
            user_query,
            user_repo.clone(),
            hasher,
        )),
        delete: Arc::new(DeleteUserService::new(user_repo)),
    };

    let tag = TagUseCases {
        create: Arc::new(CreateTagService::new(tag_query.clone(), tag_repo.clone())),
        list: Arc::new(ListTagsService::new(tag_query)),
        delete: Arc::new(DeleteTagService::new(tag_repo)),
    };

    let group = GroupUseCases {
        create: Arc::new(CreateGroupService::new(
            group_query.clone(),
            group_repo.clone(),
            tags.clone(),
        )),
        get: Arc::new(GetGroupService::new(group_query.clone())),
        list: Arc::new(ListGroupsService::new(group_query.clone())),
        update: Arc::new(UpdateGroupService::new(
            group_query.clone(),
            group_repo.clone(),
        )),
        join: Arc::new(JoinGroupService::new(
            group_query.clone(),
            group_members.clone(),
        )),
        add_member: Arc::new(AddGroupMemberService::new(
            group_query.clone(),
            group_members.clone(),
            users.clone(),
        )),
        remove_member: Arc::new(RemoveGroupMemberService::new(
            group_query.clone(),
            group_members.clone(),
        )),
        change_member_role: Arc::new(ChangeMemberRoleService::new(
            group_query.clone(),
            group_members,
        )),
        set_tags: Arc::new(SetGroupTagsService::new(
            group_query.clone(),
            group_repo.clone(),
            tags.clone(),
        )),
        delete: Arc::new(DeleteGroupService::new(
            group_query.clone(),
            group_repo.clone(),
        )),
        restore: Arc::new(RestoreGroupService::new(group_query.clone(), group_repo)),
    };

    let event = EventUseCases {
        create: Arc::new(CreateEventService::new(
            event_repo.clone(),
            Arc::new(group_query),
            users.clone(),
            tags.clone(),
        )),
        get: Arc::new(GetEventService::new(event_query.clone())),
        list: Arc::new(ListEventsService::new(event_query.clone())),
        add_attendee: Arc::new(AddAttendeeService::new(
            event_query.clone(),
            event_attendees.clone(),
            users,
        )),
        remove_attendee: Arc::new(RemoveAttendeeService::new(
            event_query.clone(),
            event_attendees,
        )),
        set_tags: Arc::new(SetEventTagsService::new(
            event_query.clone(),
            event_repo.clone(),
            tags,
        )),
        delete: Arc::new(DeleteEventService::new(
            event_query.clone(),
            event_repo.clone(),
        )),
        restore: Arc::new(RestoreEventService::new(event_query, event_repo)),
    };

    AppState {
        user,
        group,
        event,
        tag,
    }
}

#[actix_web::main]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env()
        .inspect_err(|e| error!(error = %e, "Invalid configuration"))
        .context("loading configuration")?;
    info!(config = ?config, "Configuration loaded");

    let conn = shared::db::connect(&config.database_url(), config.db_max_connections)
        .await
        .inspect_err(|e| error!(error = %e, "Failed to connect to database"))
        .context("connecting to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .inspect_err(|e| error!(error = %e, "Migrations failed"))
            .context("applying migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    let hasher = build_password_hasher(config.hasher, config.argon2)
        .inspect_err(|e| error!(error = %e, "Password hasher could not be built"))
        .context("building password hasher")?;
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(
        JwtTokenService::new(&config.secret_key, config.token_ttl_secs),
    );

    let state = build_app_state(
        Arc::clone(&db_arc),
        hasher,
        Arc::clone(&token_provider_arc),
    );

    let server_url = config.server_url();
    info!(%server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(custom_json_config())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("binding {server_url}"))?
    .run()
    .await?;

    Ok(())
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::event::adapter::incoming::web::routes as event_routes;
    use crate::group::adapter::incoming::web::routes as group_routes;
    use crate::tag::adapter::incoming::web::routes as tag_routes;
    use crate::user::adapter::incoming::web::routes as user_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Users
    cfg.service(user_routes::sign_up_handler);
    cfg.service(user_routes::login_handler);
    cfg.service(user_routes::list_users_handler);
    // `/api/users/me` routes go before `/api/users/{id}`
    cfg.service(user_routes::update_profile_handler);
    cfg.service(user_routes::change_password_handler);
    cfg.service(user_routes::delete_user_handler);
    cfg.service(user_routes::get_user_handler);
    // Tags
    cfg.service(tag_routes::create_tag_handler);
    cfg.service(tag_routes::list_tags_handler);
    cfg.service(tag_routes::delete_tag_handler);
    // Groups
    cfg.service(group_routes::create_group_handler);
    cfg.service(group_routes::list_groups_handler);
    cfg.service(group_routes::get_group_handler);
    cfg.service(group_routes::update_group_handler);
    cfg.service(group_routes::delete_group_handler);
    cfg.service(group_routes::restore_group_handler);
    cfg.service(group_routes::join_group_handler);
    cfg.service(group_routes::add_group_member_handler);
    cfg.service(group_routes::remove_group_member_handler);
    cfg.service(group_routes::change_member_role_handler);
    cfg.service(group_routes::set_group_tags_handler);
    // Events
    cfg.service(event_routes::create_event_handler);
    cfg.service(event_routes::list_events_handler);
    cfg.service(event_routes::get_event_handler);
    cfg.service(event_routes::delete_event_handler);
    cfg.service(event_routes::restore_event_handler);
    cfg.service(event_routes::add_attendee_handler);
    cfg.service(event_routes::remove_attendee_handler);
    cfg.service(event_routes::set_event_tags_handler);
}

fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
