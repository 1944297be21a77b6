use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{
    AnalysisResults, CompletedSimulationsResponse, CreateSessionRequest, HistoryResponse,
    PostMessageRequest, Questionnaire, ResearchSession, SessionListResponse, SessionMessage,
    SessionMessagesResponse, SimulationProgress, SimulationRequest, SimulationResults,
    SimulationStartResponse, UpdateSessionRequest,
};
use tracing::debug;

use crate::{client::ResearchBackend, error::BackendError};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Verbatim backend response, used by the gateway to relay bodies unchanged.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client for the research/analysis backend
pub struct HttpResearchBackend {
    base_url: String,
    bearer_token: Option<String>,
    http_client: reqwest::Client,
}

impl HttpResearchBackend {
    pub fn new(base_url: impl Into<String>) -> Result<Self, BackendError> {
        let base_url = base_url.into();
        let base_url = base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(BackendError::invalid_request("Base URL cannot be empty"));
        }

        let http_client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| BackendError::Network { source: e })?;

        Ok(Self {
            base_url,
            bearer_token: None,
            http_client,
        })
    }

    /// Attach a bearer token sent with every request
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.bearer_token = if token.is_empty() { None } else { Some(token) };
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn headers(&self, bearer_override: Option<&str>) -> Result<HeaderMap, BackendError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let token = bearer_override.or(self.bearer_token.as_deref());
        if let Some(token) = token {
            let value = format!("Bearer {}", token);
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&value)
                    .map_err(|_| BackendError::authentication("Invalid bearer token format"))?,
            );
        }

        Ok(headers)
    }

    async fn send<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, BackendError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "Sending backend request");

        let mut request = self
            .http_client
            .request(method, &url)
            .headers(self.headers(None)?);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Network { source: e })?;

        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| BackendError::internal(format!("Failed to parse response: {}", e)))
        } else {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.parse().ok());

            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            Err(map_status(status, error_text, retry_after))
        }
    }

    /// Like `send`, but for endpoints whose response body carries no data.
    async fn send_unit<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), BackendError>
    where
        B: Serialize + ?Sized,
    {
        let raw = self
            .forward(method, path, body.map(|b| serde_json::to_value(b)).transpose()?, None)
            .await?;
        if raw.is_success() {
            Ok(())
        } else {
            Err(map_status(
                reqwest::StatusCode::from_u16(raw.status)
                    .unwrap_or(reqwest::StatusCode::INTERNAL_SERVER_ERROR),
                raw.body,
                None,
            ))
        }
    }

    /// Forward a request and return the backend's status and body verbatim.
    ///
    /// Only transport failures error here; non-2xx statuses come back as a
    /// `RawResponse` so the caller can relay them unchanged.
    pub async fn forward(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        bearer_override: Option<&str>,
    ) -> Result<RawResponse, BackendError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%method, %url, "Forwarding request");

        let mut request = self
            .http_client
            .request(method, &url)
            .headers(self.headers(bearer_override)?);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| BackendError::Network { source: e })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::Network { source: e })?;

        Ok(RawResponse { status, body })
    }
}

fn map_status(
    status: reqwest::StatusCode,
    message: String,
    retry_after: Option<u64>,
) -> BackendError {
    match status {
        reqwest::StatusCode::BAD_REQUEST => BackendError::invalid_request(message),
        reqwest::StatusCode::UNAUTHORIZED => BackendError::authentication(message),
        reqwest::StatusCode::FORBIDDEN => BackendError::authentication(message),
        reqwest::StatusCode::TOO_MANY_REQUESTS => BackendError::rate_limit(message, retry_after),
        _ => BackendError::api_error(status.as_u16(), message),
    }
}

#[async_trait]
impl ResearchBackend for HttpResearchBackend {
    async fn list_sessions(&self) -> Result<SessionListResponse, BackendError> {
        self.send::<(), _>(Method::GET, "/api/research/sessions", None)
            .await
    }

    async fn create_session(
        &self,
        request: &CreateSessionRequest,
    ) -> Result<ResearchSession, BackendError> {
        self.send(Method::POST, "/api/research/sessions", Some(request))
            .await
    }

    async fn get_session(&self, session_id: &str) -> Result<ResearchSession, BackendError> {
        self.send::<(), _>(
            Method::GET,
            &format!("/api/research/sessions/{}", session_id),
            None,
        )
        .await
    }

    async fn update_session(
        &self,
        session_id: &str,
        request: &UpdateSessionRequest,
    ) -> Result<ResearchSession, BackendError> {
        self.send(
            Method::PUT,
            &format!("/api/research/sessions/{}", session_id),
            Some(request),
        )
        .await
    }

    async fn delete_session(&self, session_id: &str) -> Result<(), BackendError> {
        self.send_unit::<()>(
            Method::DELETE,
            &format!("/api/research/sessions/{}", session_id),
            None,
        )
        .await
    }

    async fn get_messages(
        &self,
        session_id: &str,
    ) -> Result<SessionMessagesResponse, BackendError> {
        self.send::<(), _>(
            Method::GET,
            &format!("/api/research/sessions/{}/messages", session_id),
            None,
        )
        .await
    }

    async fn post_message(
        &self,
        session_id: &str,
        request: &PostMessageRequest,
    ) -> Result<SessionMessage, BackendError> {
        self.send(
            Method::POST,
            &format!("/api/research/sessions/{}/messages", session_id),
            Some(request),
        )
        .await
    }

    async fn get_questionnaire(&self, session_id: &str) -> Result<Questionnaire, BackendError> {
        self.send::<(), _>(
            Method::GET,
            &format!("/api/research/sessions/{}/questionnaire", session_id),
            None,
        )
        .await
    }

    async fn submit_questionnaire(
        &self,
        session_id: &str,
        questionnaire: &Questionnaire,
    ) -> Result<(), BackendError> {
        self.send_unit(
            Method::POST,
            &format!("/api/research/sessions/{}/questionnaire", session_id),
            Some(questionnaire),
        )
        .await
    }

    async fn start_simulation(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationStartResponse, BackendError> {
        self.send(
            Method::POST,
            "/api/research/simulation-bridge/simulate",
            Some(request),
        )
        .await
    }

    async fn simulation_progress(
        &self,
        simulation_id: &str,
    ) -> Result<SimulationProgress, BackendError> {
        self.send::<(), _>(
            Method::GET,
            &format!("/api/research/simulation-bridge/progress/{}", simulation_id),
            None,
        )
        .await
    }

    async fn completed_simulations(&self) -> Result<CompletedSimulationsResponse, BackendError> {
        self.send::<(), _>(
            Method::GET,
            "/api/research/simulation-bridge/completed",
            None,
        )
        .await
    }

    async fn completed_simulation(
        &self,
        simulation_id: &str,
    ) -> Result<SimulationResults, BackendError> {
        self.send::<(), _>(
            Method::GET,
            &format!(
                "/api/research/simulation-bridge/completed/{}",
                simulation_id
            ),
            None,
        )
        .await
    }

    async fn analyze_simulation(
        &self,
        simulation_id: &str,
    ) -> Result<AnalysisResults, BackendError> {
        self.send::<(), _>(
            Method::POST,
            &format!("/api/research/simulation-bridge/analyze/{}", simulation_id),
            None,
        )
        .await
    }

    async fn history(&self) -> Result<HistoryResponse, BackendError> {
        self.send::<(), _>(Method::GET, "/api/history", None).await
    }
}
