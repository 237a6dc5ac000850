//! Instant de bonheur API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p bonheur-api
//! ```
//!
//! Configuration is loaded from environment variables (and an optional `.env`).

use bonheur_common::{try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Initialize tracing
    if let Err(e) = try_init_tracing_with_config(TracingConfig::from_env()) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    info!("Starting Instant de bonheur API Server...");

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        app = %config.app.name,
        env = ?config.app.env,
        storage = ?config.storage.backend,
        port = config.api.port,
        "Configuration loaded"
    );

    bonheur_api::run(config).await?;

    Ok(())
}
