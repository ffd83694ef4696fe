//! Game Finder - cache-backed game catalog search service
//!
//! Serves the browser front-end's search, filter, pagination and detail data.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use game_finder::api::create_router;
use game_finder::{AppState, CatalogCaches, CatalogClient, Config, GameCatalog, SearchController};

/// Main entry point for the Game Finder service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables; refuse to start without an API key
/// 3. Build the caches, catalog client and search controller
/// 4. Schedule the initial listing fetch
/// 5. Start HTTP server on configured port
/// 6. Cancel any pending search on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "game_finder=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Game Finder");

    let config = Config::from_env();
    if let Err(err) = config.require_api_key() {
        error!("{}", err);
        return Err(err.into());
    }
    info!(
        "Configuration loaded: base_url={}, page_size={}, debounce={}ms, cache_ttl={}ms, port={}",
        config.base_url, config.page_size, config.debounce_ms, config.cache_ttl_ms, config.server_port
    );

    let caches = Arc::new(CatalogCaches::from_config(&config));
    let client = CatalogClient::new(&config, Arc::clone(&caches))
        .context("failed to build catalog client")?;
    let catalog: Arc<dyn GameCatalog> = Arc::new(client);
    let controller = Arc::new(SearchController::from_config(Arc::clone(&catalog), &config));
    info!("Catalog client and search controller initialized");

    controller.refresh().await;

    let app = create_router(AppState::new(Arc::clone(&controller), catalog, caches));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(controller))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM), then tears down the
/// controller so no debounced search fires during shutdown.
async fn shutdown_signal(controller: Arc<SearchController>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                error!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    controller.shutdown().await;
}
