#![allow(dead_code)]

//! Test infrastructure for crud-server API tests

use crud_config::{CookieConfig, ValidationConfig};
use crud_core::{InMemoryRecordStore, SchemaRegistry};
use crud_db::RecordRepository;
use crud_server::{AppState, build_router};

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, Bytes},
    http::{HeaderMap, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

/// AppState backed by an in-memory SQLite database with migrations run
pub async fn create_test_app_state() -> AppState {
    let pool = crud_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    AppState::new(
        Arc::new(RecordRepository::new(pool)),
        SchemaRegistry::builtin(ValidationConfig::default().min_password_length),
        CookieConfig::default(),
    )
}

/// AppState backed by the in-process store
pub fn create_memory_app_state(min_password_length: usize) -> AppState {
    AppState::new(
        Arc::new(InMemoryRecordStore::new()),
        SchemaRegistry::builtin(min_password_length),
        CookieConfig::default(),
    )
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("Response body is not JSON")
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).expect("Response body is not UTF-8")
    }

    pub fn header(&self, name: header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn location(&self) -> Option<&str> {
        self.header(header::LOCATION)
    }

    pub fn set_cookie(&self) -> Option<&str> {
        self.header(header::SET_COOKIE)
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn get_with_cookie(app: &Router, uri: &str, cookie: &str) -> TestResponse {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// POST an url-encoded form body
pub async fn post_form(app: &Router, uri: &str, body: &str) -> TestResponse {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn test_app() -> Router {
    build_router(create_test_app_state().await)
}

pub const VALID_USER: &str = "name=Sam&email=s%40x.com&password=abcdef";
