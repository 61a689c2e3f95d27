//! End-to-end tests for the dashboard endpoints, run against the real router
//! with an in-memory listing backend.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use gdview_core::{AppConfig, BucketResolution, Registry, StorageBackend};
use gdview_storage::{ObjectLister, StorageError, StorageResult};
use serde_json::{json, Value};

use crate::setup::routes::setup_routes;
use crate::state::AppState;

/// Listing backend that serves a fixed key set and counts listing calls.
struct MockLister {
    keys: Vec<String>,
    calls: AtomicUsize,
}

impl MockLister {
    fn new(keys: &[&str]) -> Arc<Self> {
        Arc::new(MockLister {
            keys: keys.iter().map(|k| k.to_string()).collect(),
            calls: AtomicUsize::new(0),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ObjectLister for MockLister {
    async fn list_keys(&self, bucket: &str, _prefix: Option<&str>) -> StorageResult<Vec<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if bucket == "broken-bucket" {
            return Err(StorageError::ListFailed("access denied".to_string()));
        }
        Ok(self.keys.clone())
    }

    fn public_url(&self, bucket: &str, key: &str) -> String {
        format!("https://{}.s3.amazonaws.com/{}", bucket, key)
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}

fn test_registry() -> Registry {
    let mut qa = BTreeMap::new();
    qa.insert("ack".to_string(), "qa-adapter-bucket".to_string());
    qa.insert("psr".to_string(), "qa-bulk-bucket".to_string());
    let mut ist = BTreeMap::new();
    ist.insert("ack".to_string(), "ist-adapter-bucket".to_string());
    ist.insert("psr".to_string(), "ist-bulk-bucket".to_string());

    let mut envs = BTreeMap::new();
    envs.insert("QA".to_string(), qa);
    envs.insert("IST".to_string(), ist);
    Registry::from_map(envs)
}

fn test_config(resolution: BucketResolution) -> AppConfig {
    AppConfig {
        server_port: 0,
        environment: "test".to_string(),
        cors_origins: vec!["*".to_string()],
        registry_path: String::new(),
        storage_backend: StorageBackend::Local,
        bucket_resolution: resolution,
        s3_region: None,
        s3_endpoint: None,
        local_storage_path: None,
    }
}

fn test_server(lister: Arc<MockLister>, resolution: BucketResolution) -> TestServer {
    let config = test_config(resolution);
    let state = Arc::new(AppState::new(config.clone(), test_registry(), lister));
    let router = setup_routes(&config, state).unwrap();
    TestServer::new(router).unwrap()
}

#[tokio::test]
async fn environments_come_from_the_registry_sorted() {
    let server = test_server(MockLister::new(&[]), BucketResolution::Direct);

    let response = server.get("/api/v0/environments").await;
    response.assert_status_ok();
    let envs: Vec<String> = response.json();
    assert_eq!(envs, vec!["IST".to_string(), "QA".to_string()]);
}

#[tokio::test]
async fn bucket_options_match_the_environment_role_map() {
    let server = test_server(MockLister::new(&[]), BucketResolution::Direct);

    let response = server.get("/api/v0/environments/QA/buckets").await;
    response.assert_status_ok();
    let options: Value = response.json();
    assert_eq!(
        options,
        json!([
            { "label": "ack", "value": "qa-adapter-bucket" },
            { "label": "psr", "value": "qa-bulk-bucket" }
        ])
    );
}

#[tokio::test]
async fn unknown_environment_yields_empty_bucket_options() {
    let server = test_server(MockLister::new(&[]), BucketResolution::Direct);

    let response = server.get("/api/v0/environments/PROD/buckets").await;
    response.assert_status_ok();
    let options: Vec<Value> = response.json();
    assert!(options.is_empty());
}

#[tokio::test]
async fn document_types_carry_their_placeholders() {
    let server = test_server(MockLister::new(&[]), BucketResolution::Direct);

    let response = server.get("/api/v0/document-types").await;
    response.assert_status_ok();
    let types: Value = response.json();
    assert_eq!(
        types,
        json!([
            { "value": "ACK", "placeholder": "Enter rail-bulk-id" },
            { "value": "EOD", "placeholder": "Enter rail-bulk-id" },
            { "value": "PSR", "placeholder": "Enter MSG-id" },
            { "value": "GDPost", "placeholder": "Enter rail-bulk-id" }
        ])
    );
}

#[tokio::test]
async fn input_box_placeholder_follows_the_selected_type() {
    let server = test_server(MockLister::new(&[]), BucketResolution::Direct);

    // Selecting PSR then ACK yields the replacement placeholder, not a stale one.
    let psr: Value = server.get("/api/v0/document-types/PSR/input").await.json();
    assert_eq!(psr, json!({ "placeholder": "Enter MSG-id" }));

    let ack: Value = server.get("/api/v0/document-types/ACK/input").await.json();
    assert_eq!(ack, json!({ "placeholder": "Enter rail-bulk-id" }));
}

#[tokio::test]
async fn unknown_document_type_gets_no_input_box() {
    let server = test_server(MockLister::new(&[]), BucketResolution::Direct);

    let response = server.get("/api/v0/document-types/BOGUS/input").await;
    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["code"], "INVALID_INPUT");
}

#[tokio::test]
async fn search_renders_one_link_per_matching_key() {
    let lister = MockLister::new(&["x1", "x2", "y1"]);
    let server = test_server(lister.clone(), BucketResolution::Direct);

    let response = server
        .post("/api/v0/search")
        .json(&json!({
            "environment": "QA",
            "bucket": "qa-adapter-bucket",
            "doc_type": "ACK",
            "identifier": "x"
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["bucket"], "qa-adapter-bucket");
    assert_eq!(body["count"], 2);
    assert_eq!(
        body["results"],
        json!([
            { "key": "x1", "url": "https://qa-adapter-bucket.s3.amazonaws.com/x1" },
            { "key": "x2", "url": "https://qa-adapter-bucket.s3.amazonaws.com/x2" }
        ])
    );
    assert_eq!(lister.call_count(), 1);
}

#[tokio::test]
async fn incomplete_search_never_reaches_the_listing_backend() {
    let lister = MockLister::new(&["x1"]);
    let server = test_server(lister.clone(), BucketResolution::Direct);

    for missing in ["environment", "bucket", "doc_type", "identifier"] {
        let mut body = json!({
            "environment": "QA",
            "bucket": "qa-adapter-bucket",
            "doc_type": "ACK",
            "identifier": "x"
        });
        body[missing] = json!("");

        let response = server.post("/api/v0/search").json(&body).await;
        response.assert_status_bad_request();
        let err: Value = response.json();
        assert_eq!(err["code"], "INVALID_INPUT");
        assert!(err["error"].as_str().unwrap().contains(missing));
    }

    assert_eq!(lister.call_count(), 0);
}

#[tokio::test]
async fn direct_resolution_rejects_buckets_outside_the_registry() {
    let lister = MockLister::new(&["x1"]);
    let server = test_server(lister.clone(), BucketResolution::Direct);

    let response = server
        .post("/api/v0/search")
        .json(&json!({
            "environment": "QA",
            "bucket": "attacker-bucket",
            "doc_type": "ACK",
            "identifier": "x"
        }))
        .await;
    response.assert_status_not_found();
    assert_eq!(lister.call_count(), 0);
}

#[tokio::test]
async fn by_role_resolution_derives_the_bucket_from_the_document_type() {
    let lister = MockLister::new(&["msg-7.xml", "other.xml"]);
    let server = test_server(lister.clone(), BucketResolution::ByRole);

    // PSR maps to the psr role; the submitted bucket value is ignored.
    let response = server
        .post("/api/v0/search")
        .json(&json!({
            "environment": "IST",
            "bucket": "whatever-the-dropdown-said",
            "doc_type": "PSR",
            "identifier": "msg-7"
        }))
        .await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["bucket"], "ist-bulk-bucket");
    assert_eq!(body["count"], 1);
    assert_eq!(body["results"][0]["key"], "msg-7.xml");
}

#[tokio::test]
async fn by_role_resolution_404s_on_unknown_environments() {
    let lister = MockLister::new(&["x1"]);
    let server = test_server(lister.clone(), BucketResolution::ByRole);

    let response = server
        .post("/api/v0/search")
        .json(&json!({
            "environment": "UAT",
            "bucket": "ignored",
            "doc_type": "ACK",
            "identifier": "x"
        }))
        .await;
    response.assert_status_not_found();
    assert_eq!(lister.call_count(), 0);
}

#[tokio::test]
async fn listing_failures_surface_as_storage_errors() {
    // A broken backend must produce a structured error, not an empty result.
    let mut roles = BTreeMap::new();
    roles.insert("ack".to_string(), "broken-bucket".to_string());
    let mut envs = BTreeMap::new();
    envs.insert("QA".to_string(), roles);

    let config = test_config(BucketResolution::ByRole);
    let state = Arc::new(AppState::new(
        config.clone(),
        Registry::from_map(envs),
        MockLister::new(&[]),
    ));
    let server = TestServer::new(setup_routes(&config, state).unwrap()).unwrap();

    let response = server
        .post("/api/v0/search")
        .json(&json!({
            "environment": "QA",
            "bucket": "broken-bucket",
            "doc_type": "ACK",
            "identifier": "x"
        }))
        .await;
    response.assert_status(axum::http::StatusCode::BAD_GATEWAY);
    let err: Value = response.json();
    assert_eq!(err["code"], "STORAGE_ERROR");
    assert!(!err["error"].as_str().unwrap().contains("access denied"));
}

#[tokio::test]
async fn dashboard_page_serves_the_form() {
    let server = test_server(MockLister::new(&[]), BucketResolution::Direct);

    let response = server.get("/").await;
    response.assert_status_ok();
    let body = response.text();
    assert!(body.contains("env-dropdown"));
    assert!(body.contains("search-button"));
}
