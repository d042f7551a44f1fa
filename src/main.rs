use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use warden::api::{self, AppState};
use warden::config::Config;
use warden::database::{Database, ModStore};
use warden::directory::{DirectoryCache, DirectoryClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file first (before anything else)
    dotenvy::dotenv().ok();

    // Initialize logging with sensible defaults
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warden=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting warden...");

    // Load configuration. A missing URI or token is unrecoverable.
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("Configuration error: {err}");
            std::process::exit(1);
        }
    };
    info!("Configuration loaded successfully");

    // Connect to MongoDB. Every feature depends on a live store, so an
    // unreachable store means we stop here rather than limp along.
    info!("Connecting to MongoDB...");
    let db = match Database::connect(&config.mongodb_uri, &config.mongodb_database).await {
        Ok(db) => db,
        Err(err) => {
            error!("Could not connect to the document store: {err}");
            std::process::exit(1);
        }
    };

    let store = Arc::new(ModStore::new(&db));
    let tickets = store.mod_mails().await?;
    info!("Moderation store ready ({} mod-mail tickets on file)", tickets.len());

    // Directory cache in front of the external directory client.
    let client = Arc::new(DirectoryClient::new(
        config.directory_api_base.clone(),
        &config.directory_token,
    ));
    let cache = Arc::new(DirectoryCache::new());

    let app = api::router(AppState { cache, client });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.api_port));
    info!("Dashboard API listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {err}");
        return;
    }
    info!("Shutdown signal received");
}
