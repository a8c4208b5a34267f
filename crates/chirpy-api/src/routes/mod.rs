//! Route definitions
//!
//! JSON endpoints live under `/api`, operator pages under `/admin`, and the
//! static site under `/app`.

use std::path::Path;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers::{admin, auth, chirps, health, users, webhooks};
use crate::middleware::count_file_server_hits;
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router(state: &AppState) -> Router<AppState> {
    let root = state.config().fileserver.root.clone();

    Router::new()
        .nest("/api", api_routes())
        .nest("/admin", admin_routes())
        .merge(file_server_routes(state, &root))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(health::readiness))
        .merge(auth_routes())
        .merge(user_routes())
        .merge(chirp_routes())
        .merge(webhook_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/refresh", post(auth::refresh_token))
        .route("/revoke", post(auth::revoke_token))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new().route("/users", post(users::create_user).put(users::update_user))
}

/// Chirp routes
fn chirp_routes() -> Router<AppState> {
    Router::new()
        .route("/chirps", post(chirps::create_chirp).get(chirps::list_chirps))
        .route(
            "/chirps/:chirp_id",
            get(chirps::get_chirp).delete(chirps::delete_chirp),
        )
}

/// Webhook routes
fn webhook_routes() -> Router<AppState> {
    Router::new().route("/polka/webhooks", post(webhooks::polka_webhook))
}

/// Admin routes
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/metrics", get(admin::metrics))
        .route("/reset", post(admin::reset))
}

/// Static files under `/app`, every request counted
fn file_server_routes(state: &AppState, root: &Path) -> Router<AppState> {
    Router::new()
        .nest_service("/app", ServeDir::new(root))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            count_file_server_hits,
        ))
}
