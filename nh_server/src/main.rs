//! Community help-request server.
//!
//! Assembles the application context (session store, seeded catalog,
//! payment facilitator, locale store) once at startup and serves the REST
//! API over it.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Error;
use ctrlc::set_handler;
use log::info;
use neighborly::catalog::RequestCatalog;
use neighborly::identity::SessionManager;
use neighborly::locale::{LocaleManager, MockTranslator};
use neighborly::payment::{MockProcessor, PaymentManager};
use neighborly::storage::{FileStore, KeyValueStore, MemoryStore};
use neighborly::App;
use nh_server::{api, config::ServerConfig, metrics};
use pico_args::Arguments;

const HELP: &str = "\
Run a community help-request server

USAGE:
  nh_server [OPTIONS]

OPTIONS:
  --bind       IP:PORT     Server socket bind address   [default: env SERVER_BIND or 127.0.0.1:8080]
  --store      PATH        Client-state store file      [default: env STORE_PATH or in-memory]

FLAGS:
  --no-seed                Start with an empty catalog
  -h, --help               Print help information

ENVIRONMENT:
  SERVER_BIND              Server bind address (e.g., 0.0.0.0:8080)
  STORE_PATH               Path of the client-state store file
  SEED_CATALOG             Seed the catalog with sample requests (default: true)
  METRICS_BIND             Prometheus exporter bind address (disabled when unset)
  (See .env file for all configuration options)
";

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let bind_override: Option<SocketAddr> = pargs.opt_value_from_str("--bind")?;
    let store_override: Option<PathBuf> = pargs.opt_value_from_str("--store")?;
    let seed_override = pargs.contains("--no-seed").then_some(false);

    // Catching signals for exit.
    set_handler(|| std::process::exit(0))?;

    env_logger::builder().format_target(false).init();

    let config = ServerConfig::from_env(bind_override, store_override, seed_override)?;
    config.validate()?;

    info!("Starting community help server at {}", config.bind);

    if let Some(metrics_bind) = config.metrics_bind {
        metrics::init_metrics(metrics_bind).map_err(Error::msg)?;
        info!("Metrics exporter listening at {metrics_bind}");
    }

    // Client-state store: file-backed when configured, in-memory otherwise
    let store: Arc<dyn KeyValueStore> = match &config.store_path {
        Some(path) => {
            info!("Persisting client state to {}", path.display());
            Arc::new(FileStore::open(path)?)
        }
        None => {
            info!("Client state is in-memory only");
            Arc::new(MemoryStore::new())
        }
    };

    let catalog = if config.seed_catalog {
        RequestCatalog::seeded()
    } else {
        RequestCatalog::new()
    };
    info!("Catalog ready with {} request(s)", catalog.len().await);

    let app = App::new(
        SessionManager::new(store.clone()),
        catalog,
        PaymentManager::new(Arc::new(MockProcessor::new())),
        LocaleManager::new(store, Arc::new(MockTranslator::new())),
    );

    let state = api::AppState { app: Arc::new(app) };
    let router = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind to {}: {}", config.bind, e))?;

    info!(
        "Server is running at http://{}. Press Ctrl+C to stop.",
        config.bind
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    info!("Shutting down server...");

    Ok(())
}

/// Graceful shutdown signal
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
}
