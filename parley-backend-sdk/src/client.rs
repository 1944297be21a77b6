use crate::error::BackendError;
use async_trait::async_trait;
use shared_types::{
    AnalysisResults, CompletedSimulationsResponse, CreateSessionRequest, HistoryResponse,
    PostMessageRequest, Questionnaire, ResearchSession, SessionListResponse, SessionMessage,
    SessionMessagesResponse, SimulationProgress, SimulationRequest, SimulationResults,
    SimulationStartResponse, UpdateSessionRequest,
};

/// Typed operations against the research/analysis backend.
///
/// The backend itself is an opaque collaborator; this trait only fixes the
/// wire contract so workflows can run against a mock in tests.
#[async_trait]
pub trait ResearchBackend: Send + Sync {
    async fn list_sessions(&self) -> Result<SessionListResponse, BackendError>;
    async fn create_session(
        &self,
        request: &CreateSessionRequest,
    ) -> Result<ResearchSession, BackendError>;
    async fn get_session(&self, session_id: &str) -> Result<ResearchSession, BackendError>;
    async fn update_session(
        &self,
        session_id: &str,
        request: &UpdateSessionRequest,
    ) -> Result<ResearchSession, BackendError>;
    async fn delete_session(&self, session_id: &str) -> Result<(), BackendError>;

    async fn get_messages(&self, session_id: &str)
        -> Result<SessionMessagesResponse, BackendError>;
    async fn post_message(
        &self,
        session_id: &str,
        request: &PostMessageRequest,
    ) -> Result<SessionMessage, BackendError>;

    async fn get_questionnaire(&self, session_id: &str) -> Result<Questionnaire, BackendError>;
    async fn submit_questionnaire(
        &self,
        session_id: &str,
        questionnaire: &Questionnaire,
    ) -> Result<(), BackendError>;

    async fn start_simulation(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationStartResponse, BackendError>;
    async fn simulation_progress(
        &self,
        simulation_id: &str,
    ) -> Result<SimulationProgress, BackendError>;
    async fn completed_simulations(&self) -> Result<CompletedSimulationsResponse, BackendError>;
    async fn completed_simulation(
        &self,
        simulation_id: &str,
    ) -> Result<SimulationResults, BackendError>;
    async fn analyze_simulation(
        &self,
        simulation_id: &str,
    ) -> Result<AnalysisResults, BackendError>;

    async fn history(&self) -> Result<HistoryResponse, BackendError>;
}
