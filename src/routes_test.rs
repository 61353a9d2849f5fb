use axum::body::Body;
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;

#[tokio::test]
async fn healthz_returns_ok() {
    let req = Request::builder().uri("/healthz").body(Body::empty()).unwrap();
    let resp = base_routes().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let req = Request::builder().uri("/property/properties").body(Body::empty()).unwrap();
    let resp = base_routes().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
