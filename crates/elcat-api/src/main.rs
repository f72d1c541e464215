//! # elcat-api — Binary Entry Point
//!
//! Starts the election catalog HTTP server. Configuration comes from the
//! environment (see [`elcat_api::state::AppConfig::from_env`]).

use elcat_api::state::AppConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    elcat_api::telemetry::init(elcat_api::telemetry::json_requested(), "info")?;

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Configuration error: {e}");
        e
    })?;

    elcat_api::server::run(config, elcat_api::server::shutdown_signal()).await?;
    Ok(())
}
