//! Bearer-token gating and public routes

mod common;

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use noteful_server::{build_router, MemoryStore, ServerConfig};

async fn status_and_body(app: axum::Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    (status, bytes.to_vec())
}

#[tokio::test]
async fn missing_token_is_401() {
    let request = Request::builder()
        .uri("/api/noteful")
        .body(Body::empty())
        .unwrap();
    let (status, body) = status_and_body(common::app(), request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, json!({ "error": "Unauthorized request" }));
}

#[tokio::test]
async fn wrong_token_is_401() {
    let request = Request::builder()
        .uri("/api/noteful/folders")
        .header(header::AUTHORIZATION, "Bearer nope")
        .body(Body::empty())
        .unwrap();
    let (status, _) = status_and_body(common::app(), request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_is_public() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = status_and_body(common::app(), request).await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn root_greets_with_token() {
    let request = Request::builder()
        .uri("/")
        .header(header::AUTHORIZATION, format!("Bearer {}", common::TOKEN))
        .body(Body::empty())
        .unwrap();
    let (status, body) = status_and_body(common::app(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"Hello Noteful!");
}

#[tokio::test]
async fn no_configured_token_disables_check() {
    let app = build_router(Arc::new(MemoryStore::new()), &ServerConfig::default());
    let request = Request::builder()
        .uri("/api/noteful")
        .body(Body::empty())
        .unwrap();
    let (status, _) = status_and_body(app, request).await;

    assert_eq!(status, StatusCode::OK);
}
