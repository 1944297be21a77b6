use crate::proxy::{relay, ProxyState};
use actix_web::{delete, get, post, put, web, HttpRequest, HttpResponse};
use reqwest::Method;
use tracing::info;

#[get("/api/research/sessions")]
pub async fn list_sessions(req: HttpRequest, state: web::Data<ProxyState>) -> HttpResponse {
    info!("Listing research sessions");
    relay(
        &state,
        &req,
        Method::GET,
        "/api/research/sessions",
        None,
        "Failed to fetch sessions",
    )
    .await
}

#[post("/api/research/sessions")]
pub async fn create_session(
    req: HttpRequest,
    body: web::Json<serde_json::Value>,
    state: web::Data<ProxyState>,
) -> HttpResponse {
    info!("Creating research session");
    relay(
        &state,
        &req,
        Method::POST,
        "/api/research/sessions",
        Some(body.into_inner()),
        "Failed to create session",
    )
    .await
}

#[get("/api/research/sessions/{session_id}")]
pub async fn get_session(
    req: HttpRequest,
    session_id: web::Path<String>,
    state: web::Data<ProxyState>,
) -> HttpResponse {
    let id = session_id.into_inner();
    info!(session_id = %id, "Retrieving session");
    relay(
        &state,
        &req,
        Method::GET,
        &format!("/api/research/sessions/{}", id),
        None,
        "Failed to fetch session",
    )
    .await
}

#[put("/api/research/sessions/{session_id}")]
pub async fn update_session(
    req: HttpRequest,
    session_id: web::Path<String>,
    body: web::Json<serde_json::Value>,
    state: web::Data<ProxyState>,
) -> HttpResponse {
    let id = session_id.into_inner();
    info!(session_id = %id, "Updating session");
    relay(
        &state,
        &req,
        Method::PUT,
        &format!("/api/research/sessions/{}", id),
        Some(body.into_inner()),
        "Failed to update session",
    )
    .await
}

#[delete("/api/research/sessions/{session_id}")]
pub async fn delete_session(
    req: HttpRequest,
    session_id: web::Path<String>,
    state: web::Data<ProxyState>,
) -> HttpResponse {
    let id = session_id.into_inner();
    info!(session_id = %id, "Deleting session");
    relay(
        &state,
        &req,
        Method::DELETE,
        &format!("/api/research/sessions/{}", id),
        None,
        "Failed to delete session",
    )
    .await
}

#[get("/api/research/sessions/{session_id}/messages")]
pub async fn get_session_messages(
    req: HttpRequest,
    session_id: web::Path<String>,
    state: web::Data<ProxyState>,
) -> HttpResponse {
    let id = session_id.into_inner();
    info!(session_id = %id, "Retrieving session messages");
    relay(
        &state,
        &req,
        Method::GET,
        &format!("/api/research/sessions/{}/messages", id),
        None,
        "Failed to fetch session messages",
    )
    .await
}

#[post("/api/research/sessions/{session_id}/messages")]
pub async fn post_session_message(
    req: HttpRequest,
    session_id: web::Path<String>,
    body: web::Json<serde_json::Value>,
    state: web::Data<ProxyState>,
) -> HttpResponse {
    let id = session_id.into_inner();
    info!(session_id = %id, "Posting session message");
    relay(
        &state,
        &req,
        Method::POST,
        &format!("/api/research/sessions/{}/messages", id),
        Some(body.into_inner()),
        "Failed to post session message",
    )
    .await
}

#[get("/api/research/sessions/{session_id}/questionnaire")]
pub async fn get_questionnaire(
    req: HttpRequest,
    session_id: web::Path<String>,
    state: web::Data<ProxyState>,
) -> HttpResponse {
    let id = session_id.into_inner();
    info!(session_id = %id, "Retrieving questionnaire");
    relay(
        &state,
        &req,
        Method::GET,
        &format!("/api/research/sessions/{}/questionnaire", id),
        None,
        "Failed to fetch questionnaire",
    )
    .await
}

#[post("/api/research/sessions/{session_id}/questionnaire")]
pub async fn submit_questionnaire(
    req: HttpRequest,
    session_id: web::Path<String>,
    body: web::Json<serde_json::Value>,
    state: web::Data<ProxyState>,
) -> HttpResponse {
    let id = session_id.into_inner();
    info!(session_id = %id, "Submitting questionnaire");
    relay(
        &state,
        &req,
        Method::POST,
        &format!("/api/research/sessions/{}/questionnaire", id),
        Some(body.into_inner()),
        "Failed to submit questionnaire",
    )
    .await
}
