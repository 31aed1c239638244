use utoipa::{OpenApi, Modify, openapi::security::{SecurityScheme, HttpAuthScheme, HttpBuilder}};
use crate::auth;
use crate::gateway;
use crate::handlers;
use crate::models;
use crate::novels;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Novel Portal API",
        description = "Request gateway in front of a webnovel tracker backend.",
        version = "0.1.0"
    ),
    servers(
        (url = "http://localhost:7783", description = "Local development server")
    ),
    paths(
        handlers::backend::proxy,
        handlers::novels::list_novels,
        handlers::novels::random_novels,
        handlers::novels::novel_stats,
        handlers::novels::export_csv,
        handlers::novels::export_json,
        handlers::key::get_key_age,
        handlers::key::refresh_key,
    ),
    components(
        schemas(
            gateway::BackendRequest,
            gateway::BackendRequestResponse,
            gateway::Method,
            models::ChapterId,
            models::NovelEntry,
            models::NovelStats,
            models::NovelSubset,
            models::Status,
            novels::FilterColumn,
            novels::SortKey,
            novels::SortOrder,
            auth::Role,
            handlers::key::KeyAgeResponse,
            handlers::key::KeyRefreshResponse,
        )
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .build(),
            ),
        )
    }
}
