//! Common test utilities for integration tests.
//!
//! Apps are built over the in-memory catalog store unless a test asks for
//! PostgreSQL through `TEST_DATABASE_URL`.

// Not every integration test binary uses every helper.
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request},
    Router,
};
use domain::services::{CatalogService, CatalogStore, InMemoryCatalogStore};
use duo_finder_api::{app::create_app, config::Config};
use persistence::PgCatalogStore;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Test configuration with embedded defaults.
pub fn test_config() -> Config {
    Config::load_for_test(&[
        ("server.host", "127.0.0.1"),
        ("logging.level", "debug"),
        ("logging.format", "pretty"),
    ])
    .expect("Failed to build test config")
}

/// App over a fresh in-memory store. The store is returned for inspection.
pub fn create_test_app() -> (Router, Arc<InMemoryCatalogStore>) {
    let store = Arc::new(InMemoryCatalogStore::new());
    let app = app_with_store(store.clone());
    (app, store)
}

/// App whose storage fails every call.
pub fn create_unavailable_app() -> Router {
    app_with_store(Arc::new(InMemoryCatalogStore::unavailable()))
}

pub fn app_with_store(store: Arc<dyn CatalogStore>) -> Router {
    create_app(test_config(), CatalogService::new(store))
}

/// App over PostgreSQL, or `None` when `TEST_DATABASE_URL` is not set.
pub async fn create_pg_test_app() -> Option<Router> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;

    let config = Config::load_for_test(&[("database.url", url.as_str())])
        .expect("Failed to build test config");
    let pool = persistence::db::connect(&config.database.pool_config())
        .await
        .expect("Failed to prepare test database");

    let store: Arc<dyn CatalogStore> = Arc::new(PgCatalogStore::new(pool));
    Some(create_app(config, CatalogService::new(store)))
}

/// Build a JSON request.
pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    raw_json_request(method, uri, &body.to_string())
}

/// Build a request with a JSON content type and an arbitrary body.
pub fn raw_json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn parse_response_body(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(Value::Null)
}

/// A complete, valid ad submission.
pub fn valid_ad_body() -> Value {
    json!({
        "name": "Diego",
        "yearsPlaying": 3,
        "discord": "diego#1234",
        "weekDays": [1, 3, 5],
        "hourStart": "08:00",
        "hourEnd": "18:00",
        "useVoiceChannel": true
    })
}

/// Create a game through the API and return its JSON.
pub async fn create_test_game(app: &Router, title: &str) -> Value {
    let request = json_request(
        Method::POST,
        "/api/v1/games",
        json!({ "game": title, "bannerUrl": format!("https://cdn.example.com/{}.png", title) }),
    );
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    parse_response_body(response).await
}

/// Publish an ad for `game_id` through the API and return its JSON.
pub async fn create_test_ad(app: &Router, game_id: &str, body: Value) -> Value {
    let request = json_request(Method::POST, &format!("/api/v1/games/{}/ads", game_id), body);
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), axum::http::StatusCode::CREATED);
    parse_response_body(response).await
}
