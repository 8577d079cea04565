mod common;

use axum_test::TestServer;
use linkhop::api::routes::routes;
use serde_json::Value;
use std::sync::atomic::Ordering;

#[tokio::test]
async fn test_health_check_healthy() {
    let ctx = common::create_test_state();
    let server = TestServer::new(routes().with_state(ctx.state.clone())).unwrap();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["database"]["status"], "ok");
    assert_eq!(body["checks"]["cache"]["status"], "ok");
    assert_eq!(body["checks"]["click_queue"]["status"], "ok");
}

#[tokio::test]
async fn test_health_check_database_down() {
    let ctx = common::create_test_state();
    ctx.store.fail_reads.store(true, Ordering::SeqCst);
    let server = TestServer::new(routes().with_state(ctx.state.clone())).unwrap();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let body: Value = response.json();
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["checks"]["database"]["status"], "error");
}

#[tokio::test]
async fn test_health_check_click_queue_closed() {
    let common::TestContext { state, clicks, .. } = common::create_test_state();
    drop(clicks);
    let server = TestServer::new(routes().with_state(state)).unwrap();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);
    let body: Value = response.json();
    assert_eq!(body["checks"]["click_queue"]["status"], "error");
}
