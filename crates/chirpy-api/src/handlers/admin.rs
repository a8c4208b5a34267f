//! Admin handlers

use axum::{extract::State, response::Html};
use chirpy_service::AdminService;

use crate::response::ApiResult;
use crate::state::AppState;

/// File server metrics page
///
/// GET /admin/metrics
pub async fn metrics(State(state): State<AppState>) -> Html<String> {
    Html(AdminService::new(state.service_context()).metrics_page())
}

/// Reset hits and delete every user (dev platform only)
///
/// POST /admin/reset
pub async fn reset(State(state): State<AppState>) -> ApiResult<&'static str> {
    AdminService::new(state.service_context()).reset().await?;
    Ok("Reset successful")
}
