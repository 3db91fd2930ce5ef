//! Tests for system endpoints.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use crate::api::{AppState, routes};
use crate::db::MemoryDatabase;

fn test_app() -> axum::Router {
    routes::create_router(AppState::new(Arc::new(MemoryDatabase::new())))
}

#[tokio::test(flavor = "multi_thread")]
async fn root_returns_the_service_banner() {
    let app = test_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(std::str::from_utf8(&body).unwrap().starts_with("menagerie"));
}

#[tokio::test(flavor = "multi_thread")]
async fn health_reports_ok_when_the_store_answers() {
    let app = test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(value["status"], "ok");
}
