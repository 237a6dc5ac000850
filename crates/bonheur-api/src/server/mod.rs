//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use bonheur_common::{AppConfig, AppError, AppResult, StorageBackend};
use bonheur_core::traits::PostRepository;
use bonheur_core::SnowflakeGenerator;
use bonheur_db::{create_pool, ensure_schema, InMemoryPostRepository, PgPostRepository};
use bonheur_service::{ServiceContextBuilder, SmtpNotifier};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes get the base stack only so probes are never rate limited.
pub fn create_app(state: AppState) -> AppResult<Router> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;
    let health = apply_middleware(health_routes());

    Ok(api.merge(health).with_state(state))
}

/// Select the storage backend named in the configuration
async fn create_post_repository(config: &AppConfig) -> AppResult<Arc<dyn PostRepository>> {
    match config.storage.backend {
        StorageBackend::Postgres => {
            info!("Connecting to PostgreSQL...");
            let db_config = bonheur_db::DatabaseConfig {
                url: config.database.url.clone(),
                max_connections: config.database.max_connections,
                min_connections: config.database.min_connections,
                ..Default::default()
            };
            let pool = create_pool(&db_config)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            ensure_schema(&pool)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            Ok(Arc::new(PgPostRepository::new(pool)))
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage; posts are lost on restart");
            Ok(Arc::new(InMemoryPostRepository::new()))
        }
    }
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    let post_repo = create_post_repository(&config).await?;

    let notifier =
        Arc::new(SmtpNotifier::new(&config.mail).map_err(|e| AppError::Config(e.to_string()))?);

    let snowflake_generator = Arc::new(
        SnowflakeGenerator::new(config.snowflake.worker_id)
            .map_err(|e| AppError::Config(e.to_string()))?,
    );

    let service_context = ServiceContextBuilder::new()
        .post_repo(post_repo)
        .notifier(notifier)
        .snowflake_generator(snowflake_generator)
        .abuse_recipient(config.mail.abuse_recipient.clone())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Resolve when Ctrl+C or SIGTERM is received
pub async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!(error = %e, "Failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

/// Run the HTTP server until a shutdown signal arrives
pub async fn run_server(app: Router, addr: SocketAddr) -> AppResult<()> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    let state = create_app_state(config).await?;
    let app = create_app(state)?;

    run_server(app, addr).await
}
