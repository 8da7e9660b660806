//! API Server Entry Point
//!
//! Loads configuration, picks the item store, waits for the database and
//! serves the composed router until Ctrl-C or SIGTERM. Startup errors use
//! `anyhow`; request errors are rendered by each context's error type.

mod config;
mod health;
mod router;

#[cfg(test)]
mod tests;

use axum::Router;
use platform::readiness::wait_until_ready;
use std::net::SocketAddr;
use storage::{ItemStore, MemoryItemStore, PgItemStore};
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ApiConfig;

const DEFAULT_LOG_FILTER: &str =
    "api=info,auth=info,blog=info,portfolio=info,storage=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    init_tracing();

    let config = ApiConfig::from_env()?;
    tracing::info!(app = %config.app_name, auth = ?config.auth, "Configuration loaded");

    match config.database_url.as_deref() {
        Some(database_url) => {
            let store = PgItemStore::connect_lazy(database_url, config.db_max_connections)?;

            let probe = store.clone();
            wait_until_ready("database", config.db_readiness, move || {
                let probe = probe.clone();
                async move { probe.ping().await }
            })
            .await?;

            sqlx::migrate!("../../../database/migrations")
                .run(store.pool())
                .await?;
            tracing::info!("Migrations completed");

            let app = router::build_router(store.clone(), &config)?;
            let served = serve(app, config.bind_addr).await;

            store.close().await;
            served
        }
        None => {
            tracing::warn!("DATABASE_URL is not set; using the in-memory store");
            let app = router::build_router(MemoryItemStore::new(), &config)?;
            serve(app, config.bind_addr).await
        }
    }
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let registry = tracing_subscriber::registry().with(filter);

    let json = std::env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

async fn serve(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
