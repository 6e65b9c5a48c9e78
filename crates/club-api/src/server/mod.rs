//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use axum::Router;
use club_common::{AppConfig, AppError, AppResult};
use club_db::{create_pool, run_migrations, DatabaseConfig, InMemoryStore};
use club_service::ServiceContext;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, warn};

use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health probes are mounted outside the rate limiter.
pub fn create_app(state: AppState) -> AppResult<Router> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;

    Ok(Router::new()
        .merge(health_routes())
        .merge(api)
        .with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> AppResult<AppState> {
    let service_context = if config.database.is_in_memory() {
        warn!("Using the in-memory store; data is lost on shutdown");
        ServiceContext::in_memory(InMemoryStore::new())
    } else {
        info!("Connecting to PostgreSQL...");
        let pool = create_pool(&DatabaseConfig::from(&config.database))
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        info!("PostgreSQL connection established");

        if config.database.run_migrations {
            run_migrations(&pool)
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
        }

        ServiceContext::postgres(pool)
    };

    Ok(AppState::new(service_context, config))
}

/// Serve the application on an already bound listener until shutdown
pub async fn run_server(app: Router, listener: TcpListener) -> AppResult<()> {
    let addr = listener.local_addr().map_err(AppError::internal)?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::internal)?;

    info!("Server stopped");
    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr = config.api.address();

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state)?;

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    run_server(app, listener).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!(error = %e, "Failed to install terminate handler");
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
