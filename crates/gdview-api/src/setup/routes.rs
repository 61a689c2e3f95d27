//! Route configuration and setup

use std::sync::Arc;

use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Json, Router,
};
use gdview_core::AppConfig;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;

/// Setup all application routes
pub fn setup_routes(config: &AppConfig, state: Arc<AppState>) -> Result<Router<()>, anyhow::Error> {
    let cors = setup_cors(config)?;

    let router = Router::new()
        .route("/", get(handlers::page::dashboard))
        .route(
            "/api/v0/environments",
            get(handlers::environments::list_environments),
        )
        .route(
            "/api/v0/environments/{env}/buckets",
            get(handlers::environments::bucket_options),
        )
        .route(
            "/api/v0/document-types",
            get(handlers::document_types::list_document_types),
        )
        .route(
            "/api/v0/document-types/{doc_type}/input",
            get(handlers::document_types::input_box),
        )
        .route("/api/v0/search", post(handlers::search::search))
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    Ok(router)
}

fn setup_cors(config: &AppConfig) -> Result<CorsLayer, anyhow::Error> {
    let cors = if config.cors_origins.contains(&"*".to_string()) {
        tracing::warn!("CORS configured to allow all origins - not recommended for production");
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    } else {
        let origins: Result<Vec<HeaderValue>, _> =
            config.cors_origins.iter().map(|o| o.parse()).collect();

        CorsLayer::new()
            .allow_origin(origins.unwrap_or_default())
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers(Any)
    };
    Ok(cors)
}
