//! Interaction API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p interaction-api
//! ```
//!
//! Configuration is loaded from environment variables (or a `.env` file).

use interaction_common::{try_init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    let config = AppConfig::from_env();

    // Logging comes up before the config error is reported
    let tracing_config = config
        .as_ref()
        .map(|config| TracingConfig::for_environment(config.app.env))
        .unwrap_or_default();
    if let Err(e) = try_init_tracing(&tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    info!(
        env = ?config.app.env,
        port = config.api.port,
        "Starting Interaction API Server..."
    );

    // Run the server
    if let Err(e) = interaction_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}
