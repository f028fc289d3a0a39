//! Shared helpers for driving the router in-process

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use noteful_server::{build_router, MemoryStore, NotefulStore, ServerConfig};

pub const TOKEN: &str = "test-token";

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Value,
}

pub fn app() -> Router {
    app_with_store(Arc::new(MemoryStore::new()))
}

pub fn app_with_store(store: Arc<dyn NotefulStore>) -> Router {
    let config = ServerConfig {
        api_token: Some(TOKEN.to_string()),
        ..ServerConfig::default()
    };
    build_router(store, &config)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN));

    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).expect("request"))
        .await
        .expect("response");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    TestResponse {
        status,
        headers,
        body,
    }
}

/// Create a folder and return its id.
pub async fn create_folder(app: &Router, name: &str) -> i64 {
    let res = send(
        app,
        Method::POST,
        "/api/noteful/folders",
        Some(serde_json::json!({ "folder_name": name })),
    )
    .await;
    assert_eq!(res.status, StatusCode::CREATED);
    res.body["id"].as_i64().expect("folder id")
}

/// Create a note in `folder_id` and return the created body.
pub async fn create_note(app: &Router, title: &str, content: &str, folder_id: i64) -> Value {
    let res = send(
        app,
        Method::POST,
        "/api/noteful",
        Some(serde_json::json!({
            "title": title,
            "content": content,
            "folder_id": folder_id,
        })),
    )
    .await;
    assert_eq!(res.status, StatusCode::CREATED);
    res.body
}
