//! Application setup and initialization
//!
//! This module contains all application initialization logic extracted from
//! main.rs for better organization and testability.

pub mod routes;
pub mod server;

use std::sync::Arc;

use anyhow::{Context, Result};
use gdview_core::{AppConfig, Registry};

use crate::state::AppState;

/// Initialize the entire application
pub async fn initialize_app(config: AppConfig) -> Result<(Arc<AppState>, axum::Router)> {
    let registry = Registry::from_file(&config.registry_path)
        .context("Failed to load the bucket registry")?;

    let lister = gdview_storage::create_lister(&config)
        .await
        .context("Failed to initialize the listing backend")?;

    tracing::info!(
        backend = %lister.backend_type(),
        resolution = ?config.bucket_resolution,
        "Configuration loaded"
    );

    let state = Arc::new(AppState::new(config.clone(), registry, lister));
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
