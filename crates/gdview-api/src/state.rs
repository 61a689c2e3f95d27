//! Application state shared by all handlers.

use std::sync::Arc;

use gdview_core::{AppConfig, Registry};
use gdview_storage::ObjectLister;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub registry: Arc<Registry>,
    pub lister: Arc<dyn ObjectLister>,
}

impl AppState {
    pub fn new(config: AppConfig, registry: Registry, lister: Arc<dyn ObjectLister>) -> Self {
        AppState {
            config,
            registry: Arc::new(registry),
            lister,
        }
    }
}
