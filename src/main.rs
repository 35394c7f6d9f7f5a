//! # Marketplace Links
//!
//! HTTP entry point: initializes tracing, loads configuration and serves the
//! link resolution API.

use anyhow::Result;
use tracing::info;

use marketplace_links::config::Settings;
use marketplace_links::startup::Application;

#[tokio::main]
async fn main() -> Result<()> {
    marketplace_links::telemetry::init_tracing();

    info!("Starting marketplace link service...");

    let settings = Settings::load()?;
    info!(
        host = %settings.server.host,
        port = %settings.server.port,
        environment = %settings.environment,
        max_batch_size = settings.links.max_batch_size,
        "Configuration loaded"
    );

    let application = Application::build(settings).await?;

    info!("Server ready to accept connections");
    application.run_until_stopped().await?;

    Ok(())
}
