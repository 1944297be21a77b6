use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use parley_backend_sdk::HttpResearchBackend;
use reqwest::Method;
use shared_types::ErrorResponse;
use tracing::{error, warn};

use crate::config::AuthConfig;

/// Shared state for the proxy handlers: the backend client plus the token
/// fallback policy.
pub struct ProxyState {
    backend: HttpResearchBackend,
    auth: AuthConfig,
}

impl ProxyState {
    pub fn new(backend: HttpResearchBackend, auth: AuthConfig) -> Self {
        Self { backend, auth }
    }

    /// Resolve the bearer token for an incoming request: the request's own
    /// Authorization header wins; the configured dev token is only a
    /// fallback when dev auth is enabled.
    fn bearer_for(&self, req: &HttpRequest) -> Option<String> {
        if let Some(header) = req.headers().get(actix_web::http::header::AUTHORIZATION) {
            if let Ok(value) = header.to_str() {
                if let Some(token) = value.strip_prefix("Bearer ") {
                    return Some(token.to_string());
                }
            }
        }
        if self.auth.dev_token_enabled {
            return self.auth.dev_token.clone();
        }
        None
    }
}

/// Forward a request to the backend and relay the result.
///
/// 2xx responses pass through body and status unchanged; non-2xx responses
/// keep the upstream status wrapped in the `{error, details}` envelope;
/// transport failures become a 500 with the same envelope shape.
pub async fn relay(
    state: &ProxyState,
    req: &HttpRequest,
    method: Method,
    path: &str,
    body: Option<serde_json::Value>,
    error_context: &str,
) -> HttpResponse {
    let token = state.bearer_for(req);

    match state
        .backend
        .forward(method, path, body, token.as_deref())
        .await
    {
        Ok(raw) if raw.is_success() => {
            let status =
                StatusCode::from_u16(raw.status).unwrap_or(StatusCode::OK);
            HttpResponse::build(status)
                .content_type("application/json")
                .body(raw.body)
        }
        Ok(raw) => {
            warn!(status = raw.status, path, "Backend returned an error status");
            let status =
                StatusCode::from_u16(raw.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            HttpResponse::build(status)
                .json(ErrorResponse::with_details(error_context, raw.body))
        }
        Err(err) => {
            error!(error = %err, path, "Backend request failed");
            HttpResponse::InternalServerError()
                .json(ErrorResponse::with_details(error_context, err.to_string()))
        }
    }
}
