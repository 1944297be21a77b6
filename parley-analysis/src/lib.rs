//! Repo-local analysis logic for the research dashboard: the heuristic
//! sentiment classifier, the questionnaire-to-simulation transform, the
//! simulation workflow with its progress poller, and the persisted results
//! store.

pub mod questionnaire;
pub mod sentiment;
pub mod store;
pub mod workflow;

pub use questionnaire::simulation_request_from_questionnaire;
pub use sentiment::{classify_statements, sentiment_evidence, ClassifierConfig};
pub use store::{JsonFileStore, MemoryResultsStore, ResultsStore, StoreError, StoreEvent};
pub use workflow::{
    CancelToken, FlowState, PollConfig, SimulationWorkflow, WorkflowError,
};
