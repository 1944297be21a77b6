use parley_backend_sdk::{BackendError, HttpResearchBackend, ResearchBackend};
use reqwest::Method;

#[tokio::test]
async fn test_list_sessions_parses_response() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/research/sessions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"sessions":[{"id":"s1","title":"Churn interviews","status":"active","created_at":1700000000,"updated_at":1700000100}]}"#,
        )
        .create_async()
        .await;

    let backend = HttpResearchBackend::new(server.url()).unwrap();
    let response = backend.list_sessions().await.unwrap();

    assert_eq!(response.sessions.len(), 1);
    assert_eq!(response.sessions[0].id, "s1");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_bearer_token_is_attached() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api/history")
        .match_header("authorization", "Bearer dev-token-123")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"entries":[]}"#)
        .create_async()
        .await;

    let backend = HttpResearchBackend::new(server.url())
        .unwrap()
        .with_bearer_token("dev-token-123");
    let response = backend.history().await.unwrap();

    assert!(response.entries.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_progress_404_maps_to_not_found() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/research/simulation-bridge/progress/sim-9")
        .with_status(404)
        .with_body("progress record expired")
        .create_async()
        .await;

    let backend = HttpResearchBackend::new(server.url()).unwrap();
    let err = backend.simulation_progress("sim-9").await.unwrap_err();

    assert!(err.is_not_found());
    match err {
        BackendError::Api { status, message } => {
            assert_eq!(status, 404);
            assert_eq!(message, "progress record expired");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unauthorized_maps_to_authentication() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/research/sessions/s1")
        .with_status(401)
        .with_body("missing token")
        .create_async()
        .await;

    let backend = HttpResearchBackend::new(server.url()).unwrap();
    let err = backend.get_session("s1").await.unwrap_err();

    assert!(matches!(err, BackendError::Authentication { .. }));
}

#[tokio::test]
async fn test_forward_relays_non_2xx_verbatim() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api/research/sessions/abc/messages")
        .with_status(404)
        .with_body("session not found")
        .create_async()
        .await;

    let backend = HttpResearchBackend::new(server.url()).unwrap();
    let raw = backend
        .forward(
            Method::GET,
            "/api/research/sessions/abc/messages",
            None,
            None,
        )
        .await
        .unwrap();

    assert_eq!(raw.status, 404);
    assert!(!raw.is_success());
    assert_eq!(raw.body, "session not found");
}

#[tokio::test]
async fn test_forward_sends_body_and_override_token() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/api/research/sessions")
        .match_header("authorization", "Bearer session-token")
        .match_body(mockito::Matcher::Json(
            serde_json::json!({"title": "New study"}),
        ))
        .with_status(201)
        .with_body(r#"{"id":"s2"}"#)
        .create_async()
        .await;

    let backend = HttpResearchBackend::new(server.url())
        .unwrap()
        .with_bearer_token("config-token");
    let raw = backend
        .forward(
            Method::POST,
            "/api/research/sessions",
            Some(serde_json::json!({"title": "New study"})),
            Some("session-token"),
        )
        .await
        .unwrap();

    assert_eq!(raw.status, 201);
    mock.assert_async().await;
}
