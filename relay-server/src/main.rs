pub mod api;
pub mod assets;
pub mod checker;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;
pub mod upstream;

pub use crate::routes::build_router;

use crate::state::AppState;
use crate::upstream::generative::GenerativeClient;
use crate::upstream::messaging::MessagingClient;

use relay_core::{AssetCachePolicy, IdentityStore, ReminderQueue, load_seed_file};

use std::collections::HashMap;
use std::error::Error;
use std::path::PathBuf;
use std::sync::Arc;

use log::{error, info, warn};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Env files first so config sees everything
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = relay_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<PathBuf> = if let Some(ref filename) = config.logging.file {
        let config_dir = relay_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting relay-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    if config.generative.api_key.is_none() {
        warn!("Generative API key missing - /api/chat will fail until one is configured");
    }

    if config.messaging.channel_token.is_none() {
        warn!("Messaging channel token missing - reminder delivery will fail");
    }

    // Load the read-only identity seed mapping, if any
    let seed = match config.seed_file_path()? {
        Some(path) => load_seed_file(&path)?,
        None => HashMap::new(),
    };

    // Build stores and upstream clients
    let identities = Arc::new(IdentityStore::with_seed(seed));
    let reminders = Arc::new(ReminderQueue::new());
    let generative = GenerativeClient::from_config(&config.generative)?;
    let messaging = MessagingClient::from_config(&config.messaging)?;

    let cache_policy = Arc::new(AssetCachePolicy::new(
        config.asset_cache.version.clone(),
        config.asset_cache.assets.clone(),
        config.asset_cache.bypass_markers.clone(),
    ));

    let static_dir = config.server.static_dir.as_ref().map(PathBuf::from);
    if let Some(ref dir) = static_dir
        && !dir.exists()
    {
        warn!("Static dir {} does not exist", dir.display());
    }

    // Build application state
    let app_state = AppState {
        identities,
        reminders,
        generative,
        messaging,
        cache_policy,
        static_dir,
    };

    // Build router
    let app = build_router(app_state);

    // Create TCP listener
    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;

    // Get actual bound address (important when port is 0 / auto-assigned)
    let actual_addr = listener.local_addr()?;
    info!("Server listening on {}", actual_addr);

    // Serve until SIGINT
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Shutdown complete");

    Ok(())
}
