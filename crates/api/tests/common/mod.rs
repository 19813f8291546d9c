#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use motocompare_api::config::ServerConfig;
use motocompare_api::router::build_app_router;
use motocompare_api::state::AppState;
use motocompare_store::MotorcycleStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        similar_limit: 3,
    }
}

/// Build the full application router over a freshly seeded catalog.
///
/// Uses the same `build_app_router` as `main.rs`, so integration tests
/// exercise the production middleware stack.
pub fn build_test_app() -> Router {
    let store = MotorcycleStore::seeded().expect("seed catalog");
    build_test_app_with(store)
}

/// Build the full application router over the given store.
pub fn build_test_app_with(store: MotorcycleStore) -> Router {
    let config = test_config();
    let state = AppState {
        store: Arc::new(store),
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config).expect("build router")
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body through the router.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Extract the ids of a `{ "data": [ {id, ...}, ... ] }` listing, in order.
pub fn data_ids(json: &serde_json::Value) -> Vec<i64> {
    json["data"]
        .as_array()
        .expect("data array")
        .iter()
        .map(|m| m["id"].as_i64().expect("numeric id"))
        .collect()
}
