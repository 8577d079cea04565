mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode, header};
use linkhop::api::middleware::cors;
use linkhop::routes::app_router;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

const FRONTEND: &str = "http://localhost:5173";

fn app(ctx: &common::TestContext) -> NormalizePath<axum::Router> {
    let cors = cors::layer(&[FRONTEND.to_string()]).unwrap();
    app_router(ctx.state.clone(), cors)
}

#[tokio::test]
async fn test_trailing_slash_is_trimmed() {
    let ctx = common::create_test_state();
    ctx.store.seed("abc123", "https://example.com");

    let response = app(&ctx)
        .oneshot(Request::get("/abc123/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "https://example.com");

    let response = app(&ctx)
        .oneshot(Request::get("/health/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_cors_preflight_from_allowed_origin() {
    let ctx = common::create_test_state();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/create")
        .header(header::ORIGIN, FRONTEND)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app(&ctx).oneshot(request).await.unwrap();

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        FRONTEND
    );
    let methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap();
    assert!(methods.contains("POST"));
    assert!(methods.contains("GET"));
}

#[tokio::test]
async fn test_cors_ignores_unknown_origin() {
    let ctx = common::create_test_state();

    let request = Request::get("/health")
        .header(header::ORIGIN, "https://evil.example")
        .body(Body::empty())
        .unwrap();

    let response = app(&ctx).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none()
    );
}
