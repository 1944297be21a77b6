use crate::proxy::{relay, ProxyState};
use actix_web::{get, post, web, HttpRequest, HttpResponse};
use reqwest::Method;
use tracing::info;

#[post("/api/research/simulation-bridge/simulate")]
pub async fn simulate(
    req: HttpRequest,
    body: web::Json<serde_json::Value>,
    state: web::Data<ProxyState>,
) -> HttpResponse {
    info!("Starting interview simulation");
    relay(
        &state,
        &req,
        Method::POST,
        "/api/research/simulation-bridge/simulate",
        Some(body.into_inner()),
        "Failed to start simulation",
    )
    .await
}

#[get("/api/research/simulation-bridge/progress/{simulation_id}")]
pub async fn progress(
    req: HttpRequest,
    simulation_id: web::Path<String>,
    state: web::Data<ProxyState>,
) -> HttpResponse {
    let id = simulation_id.into_inner();
    info!(simulation_id = %id, "Retrieving simulation progress");
    relay(
        &state,
        &req,
        Method::GET,
        &format!("/api/research/simulation-bridge/progress/{}", id),
        None,
        "Failed to fetch simulation progress",
    )
    .await
}

#[get("/api/research/simulation-bridge/completed")]
pub async fn completed(req: HttpRequest, state: web::Data<ProxyState>) -> HttpResponse {
    info!("Listing completed simulations");
    relay(
        &state,
        &req,
        Method::GET,
        "/api/research/simulation-bridge/completed",
        None,
        "Failed to fetch completed simulations",
    )
    .await
}

#[get("/api/research/simulation-bridge/completed/{simulation_id}")]
pub async fn completed_by_id(
    req: HttpRequest,
    simulation_id: web::Path<String>,
    state: web::Data<ProxyState>,
) -> HttpResponse {
    let id = simulation_id.into_inner();
    info!(simulation_id = %id, "Retrieving completed simulation");
    relay(
        &state,
        &req,
        Method::GET,
        &format!("/api/research/simulation-bridge/completed/{}", id),
        None,
        "Failed to fetch completed simulation",
    )
    .await
}

#[post("/api/research/simulation-bridge/analyze/{simulation_id}")]
pub async fn analyze(
    req: HttpRequest,
    simulation_id: web::Path<String>,
    state: web::Data<ProxyState>,
) -> HttpResponse {
    let id = simulation_id.into_inner();
    info!(simulation_id = %id, "Requesting simulation analysis");
    relay(
        &state,
        &req,
        Method::POST,
        &format!("/api/research/simulation-bridge/analyze/{}", id),
        None,
        "Failed to analyze simulation",
    )
    .await
}
