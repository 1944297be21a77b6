use crate::proxy::{relay, ProxyState};
use actix_web::{get, web, HttpRequest, HttpResponse};
use reqwest::Method;
use tracing::info;

#[get("/api/history")]
pub async fn get_history(req: HttpRequest, state: web::Data<ProxyState>) -> HttpResponse {
    info!("Retrieving history");
    relay(
        &state,
        &req,
        Method::GET,
        "/api/history",
        None,
        "Failed to fetch history",
    )
    .await
}
