use axum_helpers::create_app;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Install color-eyre first for colored error output (before any fallible operations)
    install_color_eyre();

    let config = Config::from_env()?;

    init_tracing(&config.environment);

    // Generate and annotate the product schemas before taking traffic
    let schemas = domain_products::product_schemas();
    info!(
        documents = schemas.len(),
        "Product schemas ready at {}/schemas",
        api::PRODUCT_PATH
    );

    let app = api::app(&config)?;

    info!(
        "Starting {} v{} (drain timeout {:?})",
        config.app.name, config.app.version, config.server.shutdown_timeout
    );

    create_app(app, &config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
