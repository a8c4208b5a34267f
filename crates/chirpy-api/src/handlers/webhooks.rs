//! Billing provider webhooks

use axum::extract::State;
use chirpy_service::dto::PolkaWebhookRequest;
use chirpy_service::WebhookService;

use crate::extractors::{ServiceCaller, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Apply a Polka event. Unhandled events are acknowledged and ignored.
///
/// POST /api/polka/webhooks
pub async fn polka_webhook(
    State(state): State<AppState>,
    _caller: ServiceCaller,
    ValidatedJson(request): ValidatedJson<PolkaWebhookRequest>,
) -> ApiResult<NoContent> {
    let service = WebhookService::new(state.service_context());
    service.handle(request).await?;
    Ok(NoContent)
}
