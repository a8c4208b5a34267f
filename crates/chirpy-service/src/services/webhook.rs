//! Billing webhook handling

use tracing::{debug, info, instrument};

use crate::dto::{PolkaWebhookRequest, USER_UPGRADED_EVENT};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Outcome of a webhook delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebhookOutcome {
    /// The user is now on Chirpy Red
    Upgraded,
    /// The event is not one we act on
    Ignored,
}

/// Webhook service
pub struct WebhookService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> WebhookService<'a> {
    /// Create a new WebhookService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply a billing event. The caller must already be authenticated.
    ///
    /// Upgrading is idempotent; an unknown user is `UserNotFound`.
    #[instrument(skip(self, request), fields(event = %request.event))]
    pub async fn handle(&self, request: PolkaWebhookRequest) -> ServiceResult<WebhookOutcome> {
        if request.event != USER_UPGRADED_EVENT {
            debug!("Ignoring webhook event");
            return Ok(WebhookOutcome::Ignored);
        }

        let user = self
            .ctx
            .user_repo()
            .set_chirpy_red(request.data.user_id)
            .await?;

        info!(user_id = %user.id, "User upgraded to Chirpy Red");

        Ok(WebhookOutcome::Upgraded)
    }
}
