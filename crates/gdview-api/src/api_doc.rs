//! OpenAPI documentation definition

use utoipa::OpenApi;

use crate::error::ErrorResponse;
use crate::handlers::document_types::{DocTypeOption, InputBox};
use crate::handlers::search::{FileLink, SearchRequest, SearchResponse};
use gdview_core::BucketOption;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "gdview API",
        description = "Internal dashboard for browsing disbursement documents in S3 buckets"
    ),
    paths(
        crate::handlers::environments::list_environments,
        crate::handlers::environments::bucket_options,
        crate::handlers::document_types::list_document_types,
        crate::handlers::document_types::input_box,
        crate::handlers::search::search,
    ),
    components(schemas(
        BucketOption,
        DocTypeOption,
        InputBox,
        SearchRequest,
        SearchResponse,
        FileLink,
        ErrorResponse,
    )),
    tags(
        (name = "registry", description = "Environment and bucket registry"),
        (name = "documents", description = "Document type metadata"),
        (name = "search", description = "Object key search")
    )
)]
pub struct ApiDoc;
