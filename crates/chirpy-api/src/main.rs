//! Chirpy API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p chirpy-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env` if present).

use chirpy_common::{try_init_tracing, try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration first so the log format can follow the platform
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            if let Err(init) = try_init_tracing() {
                eprintln!("Warning: Failed to initialize tracing: {init}");
            }
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        "Configuration loaded"
    );

    if let Err(e) = chirpy_api::run(config).await {
        error!(error = ?e, "Server failed to start");
        std::process::exit(1);
    }
}
