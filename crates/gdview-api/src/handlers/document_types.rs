use axum::{extract::Path, response::IntoResponse, Json};
use gdview_core::DocType;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{ErrorResponse, HttpAppError};

#[derive(Debug, Serialize, ToSchema)]
pub struct DocTypeOption {
    pub value: &'static str,
    pub placeholder: &'static str,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InputBox {
    pub placeholder: &'static str,
}

#[utoipa::path(
    get,
    path = "/api/v0/document-types",
    tag = "documents",
    responses(
        (status = 200, description = "Selectable document types", body = Vec<DocTypeOption>)
    )
)]
pub async fn list_document_types() -> impl IntoResponse {
    let options: Vec<DocTypeOption> = DocType::ALL
        .iter()
        .map(|ty| DocTypeOption {
            value: ty.as_str(),
            placeholder: ty.input_placeholder(),
        })
        .collect();
    Json(options)
}

/// Input-box rule: the identifier placeholder is a pure function of the
/// selected document type. Unknown types get a 400 and no input box.
#[utoipa::path(
    get,
    path = "/api/v0/document-types/{doc_type}/input",
    tag = "documents",
    params(
        ("doc_type" = String, Path, description = "Document type (ACK, EOD, PSR, GDPost)")
    ),
    responses(
        (status = 200, description = "Identifier input box definition", body = InputBox),
        (status = 400, description = "Unknown document type", body = ErrorResponse)
    )
)]
pub async fn input_box(Path(doc_type): Path<String>) -> Result<impl IntoResponse, HttpAppError> {
    let doc_type: DocType = doc_type.parse()?;
    Ok(Json(InputBox {
        placeholder: doc_type.input_placeholder(),
    }))
}
