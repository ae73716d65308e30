//! Test helper utilities for webserver integration tests

use std::net::SocketAddr;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use officers::RealCacheReader;
use serde_json::{Map, Value, json};
use shared::CacheConfig;
use tempfile::TempDir;
use tower::ServiceExt;
use webserver::WebServer;

pub const COMPANY: &str = "Acme Ltd";
pub const API_KEY: &str = "test-api-key";

/// Create test socket address for testing
pub fn create_test_address() -> SocketAddr {
    "127.0.0.1:3000".parse().unwrap()
}

/// Cache directory holding one company in both sources
pub fn create_test_cache() -> (TempDir, CacheConfig) {
    let dir = TempDir::new().unwrap();
    let config = CacheConfig::default().with_cache_dir(dir.path());

    let mut world_registry = Map::new();
    world_registry.insert(
        COMPANY.to_string(),
        json!({"result": [
            {"people": []},
            {"people": [
                {"primaryName": {"fullName": "Jane Doe"}, "title": "CFO"},
                {"primaryName": {"fullName": "John Roe"}, "title": "CEO"},
                {"primaryName": {"fullName": "Sam Poe"}}
            ]}
        ]}),
    );

    let mut pds = Map::new();
    pds.insert(
        COMPANY.to_string(),
        json!({"result": [{"kind": "Company", "directors": [
            {"name": "Jane Doe", "relType": "executive_director"},
            {"name": "Ann Lee", "relType": "director"}
        ]}]}),
    );

    std::fs::write(config.world_registry_path(), Value::Object(world_registry).to_string()).unwrap();
    std::fs::write(config.pds_path(), Value::Object(pds).to_string()).unwrap();

    (dir, config)
}

/// Router over the test cache, optionally requiring an API key
pub fn create_test_router(config: CacheConfig, api_key: Option<&str>) -> Router {
    let webserver = WebServer::new(
        create_test_address(),
        api_key.map(str::to_string),
        RealCacheReader::new(config),
    );
    webserver.build_router()
}

/// Issue a GET and decode the JSON body
pub async fn get_json(router: &Router, uri: &str, api_key: Option<&str>) -> (StatusCode, Value) {
    let mut request = Request::builder().uri(uri);
    if let Some(key) = api_key {
        request = request.header("x-api-key", key);
    }
    let request = request.body(Body::empty()).unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, body)
}
