//! Shared helpers for request-level tests. Each test builds a fresh router
//! from the default configuration and drives it with `tower::ServiceExt`.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, header};
use axum::response::Response;
use tower::ServiceExt;

use crate::{Config, build_router, build_state};

pub fn test_app() -> Router {
    let config = Config::default();
    let state = build_state(config).expect("test state");
    build_router(Arc::new(state))
}

pub async fn get(path: &str) -> Response {
    let request = Request::builder().uri(path).body(Body::empty()).expect("request");
    test_app().oneshot(request).await.expect("response")
}

pub async fn get_with_cookie(path: &str, cookie: &str) -> Response {
    let request = Request::builder()
        .uri(path)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .expect("request");
    test_app().oneshot(request).await.expect("response")
}

pub async fn post_json(path: &str, json: &serde_json::Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .expect("request");
    test_app().oneshot(request).await.expect("response")
}

pub async fn post_form(path: &str, body: &str) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("request");
    test_app().oneshot(request).await.expect("response")
}

pub async fn body_string(response: Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}
