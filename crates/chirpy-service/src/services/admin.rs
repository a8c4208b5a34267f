//! Admin service: file server metrics and the development reset

use tracing::{info, instrument, warn};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Admin service
pub struct AdminService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AdminService<'a> {
    /// Create a new AdminService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// File server hits so far
    pub fn hits(&self) -> u64 {
        self.ctx.hits()
    }

    /// HTML metrics page
    pub fn metrics_page(&self) -> String {
        format!(
            "<html>\n  <body>\n    <h1>Welcome, Chirpy Admin</h1>\n    <p>Chirpy has been visited {} times!</p>\n  </body>\n</html>\n",
            self.hits()
        )
    }

    /// Reset the hit counter and delete every user. Development only.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> ServiceResult<u64> {
        if !self.ctx.environment().is_development() {
            warn!(environment = ?self.ctx.environment(), "Reset rejected outside development");
            return Err(ServiceError::permission_denied(
                "Reset is only allowed in the dev environment",
            ));
        }

        self.ctx.reset_hits();
        let deleted = self.ctx.user_repo().delete_all().await?;

        info!(deleted, "Hits reset and users deleted");

        Ok(deleted)
    }
}
