mod api_doc;
mod error;
mod handlers;
mod setup;
mod state;
mod telemetry;
#[cfg(test)]
mod tests;

use gdview_core::AppConfig;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = AppConfig::from_env()?;

    telemetry::init_telemetry();

    // Initialize the application (registry, lister, routes)
    let (_state, router) = crate::setup::initialize_app(config.clone()).await?;

    // Start the server
    crate::setup::server::start_server(&config, router).await?;

    Ok(())
}
