use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use gdview_core::{filter_contains, AppError, BucketResolution, DocType};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchRequest {
    #[serde(default)]
    pub environment: String,
    #[serde(default)]
    pub bucket: String,
    #[serde(default)]
    pub doc_type: String,
    #[serde(default)]
    pub identifier: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FileLink {
    pub key: String,
    pub url: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse {
    pub bucket: String,
    pub count: usize,
    pub results: Vec<FileLink>,
}

/// Search rule: validate the four selections, resolve the target bucket,
/// list its keys, and keep the keys containing the identifier.
///
/// Validation happens before the bucket is resolved, so an incomplete
/// request never reaches the listing backend.
#[utoipa::path(
    post,
    path = "/api/v0/search",
    tag = "search",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Matching object keys with public URLs", body = SearchResponse),
        (status = 400, description = "Missing selection or unknown document type", body = ErrorResponse),
        (status = 404, description = "Bucket not resolvable from the registry", body = ErrorResponse),
        (status = 502, description = "Listing backend failure", body = ErrorResponse)
    )
)]
pub async fn search(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SearchRequest>,
) -> Result<impl IntoResponse, HttpAppError> {
    validate_request(&request)?;
    let doc_type: DocType = request.doc_type.parse()?;

    let bucket = resolve_bucket(&state, &request, doc_type)?;

    let keys = state.lister.list_keys(&bucket, None).await?;
    let matches = filter_contains(&keys, &request.identifier);

    tracing::info!(
        environment = %request.environment,
        bucket = %bucket,
        doc_type = doc_type.as_str(),
        identifier = %request.identifier,
        listed = keys.len(),
        matched = matches.len(),
        "Search completed"
    );

    let results: Vec<FileLink> = matches
        .into_iter()
        .map(|key| {
            let url = state.lister.public_url(&bucket, &key);
            FileLink { key, url }
        })
        .collect();

    Ok(Json(SearchResponse {
        bucket,
        count: results.len(),
        results,
    }))
}

fn validate_request(request: &SearchRequest) -> Result<(), AppError> {
    let missing: Vec<&str> = [
        ("environment", &request.environment),
        ("bucket", &request.bucket),
        ("doc_type", &request.doc_type),
        ("identifier", &request.identifier),
    ]
    .iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(name, _)| *name)
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::InvalidInput(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

/// Resolve the concrete bucket id per the configured policy.
fn resolve_bucket(
    state: &AppState,
    request: &SearchRequest,
    doc_type: DocType,
) -> Result<String, AppError> {
    match state.config.bucket_resolution {
        BucketResolution::Direct => {
            // The dropdown submits the bucket id itself; still require it to
            // be a bucket the registry knows about.
            if state.registry.contains_bucket(&request.bucket) {
                Ok(request.bucket.clone())
            } else {
                Err(AppError::NotFound(format!(
                    "Bucket '{}' is not in the registry",
                    request.bucket
                )))
            }
        }
        BucketResolution::ByRole => {
            let role = doc_type.bucket_role();
            state
                .registry
                .resolve(&request.environment, role)
                .map(String::from)
                .ok_or_else(|| {
                    AppError::NotFound(format!(
                        "No '{}' bucket for environment '{}'",
                        role, request.environment
                    ))
                })
        }
    }
}
