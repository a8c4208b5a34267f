//! Health check handler

/// Liveness check
///
/// GET /api/healthz
pub async fn readiness() -> &'static str {
    "OK"
}
