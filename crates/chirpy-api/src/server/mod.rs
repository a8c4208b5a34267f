//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use chirpy_common::{AppConfig, AppError, JwtService};
use chirpy_db::memory::MemoryStore;
use chirpy_db::{create_pool, run_migrations, PoolConfig};
use chirpy_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router(&state);
    let router = apply_middleware(router, &state.config().cors, state.config().app.env);
    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&PoolConfig::from(&config.database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        info!("Database migrations applied");
    }

    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));

    let service_context = ServiceContextBuilder::new()
        .postgres(pool)
        .jwt_service(jwt_service)
        .polka_key(config.polka.api_key.clone())
        .environment(config.app.env)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Create AppState backed by the in-memory repositories
///
/// The database settings in `config` are ignored. Nothing survives a restart.
pub fn create_in_memory_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));

    let service_context = ServiceContextBuilder::new()
        .in_memory(MemoryStore::new())
        .jwt_service(jwt_service)
        .polka_key(config.polka.api_key.clone())
        .environment(config.app.env)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server on an already bound listener
pub async fn run_server(app: Router, listener: TcpListener) -> Result<(), AppError> {
    let addr = listener.local_addr().map_err(|e| {
        error!(error = %e, "Failed to read local address");
        AppError::internal(e)
    })?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await.map_err(|e| {
        error!(error = %e, "Server error");
        AppError::internal(e)
    })?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state);

    info!("Starting HTTP server on {}", addr);
    let listener = bind_listener(addr).await?;

    run_server(app, listener).await
}

/// Bind the listening socket
pub async fn bind_listener(addr: SocketAddr) -> Result<TcpListener, AppError> {
    TcpListener::bind(addr).await.map_err(|e| {
        error!(%addr, error = %e, "Failed to bind");
        AppError::internal(e)
    })
}
