mod common;

use actix_web::http::header;
use actix_web::test;
use common::{dev_auth, init_app};
use parley_gateway::config::AuthConfig;
use shared_types::ErrorResponse;

#[actix_rt::test]
async fn test_success_body_and_status_pass_through() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/research/sessions/abc/messages")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"messages":[{"role":"user","content":"hi","created_at":1700000000}]}"#)
        .create_async()
        .await;

    let app = init_app(&server.url(), AuthConfig::default()).await;
    let req = test::TestRequest::get()
        .uri("/api/research/sessions/abc/messages")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["messages"][0]["content"], "hi");
}

#[actix_rt::test]
async fn test_backend_404_is_wrapped_with_details() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/research/sessions/abc/messages")
        .with_status(404)
        .with_body("session not found")
        .create_async()
        .await;

    let app = init_app(&server.url(), AuthConfig::default()).await;
    let req = test::TestRequest::get()
        .uri("/api/research/sessions/abc/messages")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "Failed to fetch session messages");
    assert_eq!(body.details.as_deref(), Some("session not found"));
}

#[actix_rt::test]
async fn test_post_body_is_forwarded_verbatim() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/research/sessions")
        .match_body(mockito::Matcher::Json(
            serde_json::json!({"title": "Churn study"}),
        ))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id":"s9","title":"Churn study","status":"active","created_at":1,"updated_at":1}"#)
        .create_async()
        .await;

    let app = init_app(&server.url(), AuthConfig::default()).await;
    let req = test::TestRequest::post()
        .uri("/api/research/sessions")
        .set_json(serde_json::json!({"title": "Churn study"}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 201);
    mock.assert_async().await;
}

#[actix_rt::test]
async fn test_incoming_bearer_token_is_forwarded() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/history")
        .match_header("authorization", "Bearer user-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"entries":[]}"#)
        .create_async()
        .await;

    // A dev token is configured, but the request's own token must win
    let app = init_app(&server.url(), dev_auth("dev-token")).await;
    let req = test::TestRequest::get()
        .uri("/api/history")
        .insert_header((header::AUTHORIZATION, "Bearer user-token"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    mock.assert_async().await;
}

#[actix_rt::test]
async fn test_dev_token_fallback_when_no_header() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/research/simulation-bridge/completed")
        .match_header("authorization", "Bearer dev-token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"simulations":[]}"#)
        .create_async()
        .await;

    let app = init_app(&server.url(), dev_auth("dev-token")).await;
    let req = test::TestRequest::get()
        .uri("/api/research/simulation-bridge/completed")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    mock.assert_async().await;
}

#[actix_rt::test]
async fn test_unreachable_backend_maps_to_500() {
    // Nothing listens here; the forward itself fails
    let app = init_app("http://127.0.0.1:9", AuthConfig::default()).await;
    let req = test::TestRequest::get()
        .uri("/api/research/sessions")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 500);
    let body: ErrorResponse = test::read_body_json(resp).await;
    assert_eq!(body.error, "Failed to fetch sessions");
    assert!(body.details.is_some());
}

#[actix_rt::test]
async fn test_delete_is_relayed_with_upstream_status() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("DELETE", "/api/research/sessions/s1")
        .with_status(204)
        .create_async()
        .await;

    let app = init_app(&server.url(), AuthConfig::default()).await;
    let req = test::TestRequest::delete()
        .uri("/api/research/sessions/s1")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 204);
    mock.assert_async().await;
}

#[actix_rt::test]
async fn test_analyze_post_without_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/research/simulation-bridge/analyze/sim-1")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"session_id":"s1","themes":[],"patterns":[],"sentiment":null,"personas":[]}"#)
        .create_async()
        .await;

    let app = init_app(&server.url(), AuthConfig::default()).await;
    let req = test::TestRequest::post()
        .uri("/api/research/simulation-bridge/analyze/sim-1")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    mock.assert_async().await;
}
