//! Static front end and health check tests.

mod common;

use axum_test::TestServer;

use common::fixtures;
use common::TestContext;

#[tokio::test]
async fn test_health_check() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();
    response.assert_text("OK");
}

/// Test files in the static directory are served as-is.
#[tokio::test]
async fn test_serves_static_file() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/app.js").await;

    response.assert_status_ok();
    response.assert_text(fixtures::APP_JS);
}

/// Test the root and share links load the study page.
#[tokio::test]
async fn test_root_serves_index() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/").add_query_param("id", "abc123").await;

    response.assert_status_ok();
    response.assert_text(fixtures::INDEX_HTML);
}

/// Test unknown paths fall back to the study page.
#[tokio::test]
async fn test_unknown_path_falls_back_to_index() {
    let ctx = TestContext::new();
    let server = TestServer::new(ctx.router()).unwrap();

    let response = server.get("/some/client/route").await;

    response.assert_status_ok();
    response.assert_text(fixtures::INDEX_HTML);
}
