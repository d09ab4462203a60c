use axum::body::Body;
use axum::http::Request;
use tower::ServiceExt;

use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    assert_eq!(healthz().await, StatusCode::OK);
}

#[tokio::test]
async fn base_routes_serve_healthz() {
    let response = base_routes()
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn base_routes_unknown_path_is_not_found() {
    let response = base_routes()
        .oneshot(Request::builder().uri("/api/quotes").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
