use chrono::Utc;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A synthetic interviewee fed to the simulation engine.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PersonaSpec {
    pub name: String,
    pub stakeholder: String,
    pub background: Option<String>,
    pub questions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SimulationRequest {
    pub session_id: String,
    pub personas: Vec<PersonaSpec>,
    pub interviews_per_stakeholder: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SimulationStartResponse {
    pub simulation_id: String,
    pub status: String,
}

/// Progress snapshot returned by the simulation-bridge progress endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SimulationProgress {
    pub simulation_id: String,
    pub percent: f32,
    pub stage: Option<String>,
    pub interviews_completed: u32,
    pub interviews_total: u32,
}

impl SimulationProgress {
    pub fn is_complete(&self) -> bool {
        self.percent >= 100.0
    }
}

/// One question/answer exchange inside a simulated interview.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct InterviewExchange {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SimulatedInterview {
    pub persona: String,
    pub stakeholder: String,
    /// Full transcript as produced by the simulation engine, in the
    /// chat-style format the dashboard renders.
    pub transcript: String,
    pub exchanges: Vec<InterviewExchange>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SimulationResults {
    pub simulation_id: String,
    pub session_id: String,
    pub interviews: Vec<SimulatedInterview>,
    pub completed_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CompletedSimulationsResponse {
    pub simulations: Vec<SimulationResults>,
}

/// Where a stored result came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SimulationSource {
    Simulation,
    Upload,
}

/// One entry of the persisted simulation-results store.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SavedSimulation {
    pub simulation_id: String,
    pub timestamp: i64,
    pub results: SimulationResults,
    pub source: SimulationSource,
}

impl SavedSimulation {
    pub fn new(results: SimulationResults, source: SimulationSource) -> Self {
        Self {
            simulation_id: results.simulation_id.clone(),
            timestamp: Utc::now().timestamp(),
            results,
            source,
        }
    }
}
