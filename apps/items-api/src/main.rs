use axum_helpers::server::create_production_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use std::time::Duration;
use tracing::info;

use items_api::{build_router, config::Config, state::AppState};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output
    install_color_eyre();

    // Load configuration from environment variables
    let config = Config::from_env()?;

    // Initialize tracing
    init_tracing(&config.environment);

    let state = AppState { config };

    let app = build_router(&state)?;

    info!(
        "Starting {} v{} with graceful shutdown (30s timeout)",
        state.config.app.name, state.config.app.version
    );

    create_production_app(
        app,
        &state.config.server,
        Duration::from_secs(30),
        async move {
            info!("Shutting down: in-memory item store is discarded");
        },
    )
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Items API shutdown complete");
    Ok(())
}
