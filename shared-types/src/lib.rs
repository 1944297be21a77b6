use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod analysis;
pub mod history;
pub mod questionnaire;
pub mod session;
pub mod simulation;
pub mod typescript_gen;

pub use typescript_gen::generate_typescript_definitions;

pub use analysis::{
    AnalysisResults, Pattern, PersonaProfile, SentimentBuckets, Theme,
};
pub use history::{HistoryEntry, HistoryResponse};
pub use questionnaire::{Questionnaire, StakeholderQuestions};
pub use session::{
    CreateSessionRequest, PostMessageRequest, ResearchSession, SessionListResponse,
    SessionMessage, SessionMessagesResponse, UpdateSessionRequest,
};
pub use simulation::{
    CompletedSimulationsResponse, InterviewExchange, PersonaSpec, SavedSimulation,
    SimulatedInterview, SimulationProgress, SimulationRequest, SimulationResults,
    SimulationSource, SimulationStartResponse,
};

/// Error envelope returned by the gateway for any failed request.
///
/// `details` carries the upstream backend body when the failure was a relayed
/// non-2xx response, and is omitted for purely local failures.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}
