use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use gdview_core::BucketOption;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/v0/environments",
    tag = "registry",
    responses(
        (status = 200, description = "Environment names", body = Vec<String>)
    )
)]
pub async fn list_environments(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, HttpAppError> {
    Ok(Json(state.registry.environments()))
}

/// Bucket-options rule: the (role, bucket-id) pairs for an environment.
/// An unknown environment yields an empty option set rather than an error,
/// mirroring an unselected dropdown.
#[utoipa::path(
    get,
    path = "/api/v0/environments/{env}/buckets",
    tag = "registry",
    params(
        ("env" = String, Path, description = "Environment name")
    ),
    responses(
        (status = 200, description = "Bucket options for the environment", body = Vec<BucketOption>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn bucket_options(
    State(state): State<Arc<AppState>>,
    Path(env): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    Ok(Json(state.registry.bucket_options(&env)))
}
