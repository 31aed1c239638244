pub mod auth;
pub mod gateway;
pub mod handlers;
pub mod models;
pub mod novels;
pub mod openapi;
pub mod settings;
pub mod state;
pub mod utils;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::auth::middleware::session_middleware;
use crate::state::AppState;

/// Builds the HTTP surface with the session middleware applied to every route.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/backend", post(handlers::backend::proxy))
        .route("/novels", get(handlers::novels::list_novels))
        .route("/novels/random", get(handlers::novels::random_novels))
        .route("/novels/stats", get(handlers::novels::novel_stats))
        .route("/novels/export.csv", get(handlers::novels::export_csv))
        .route("/novels/export.json", get(handlers::novels::export_json))
        .route("/key", get(handlers::key::get_key_age).post(handlers::key::refresh_key))
        .layer(middleware::from_fn_with_state(state.key_manager.clone(), session_middleware))
        .with_state(state)
}
