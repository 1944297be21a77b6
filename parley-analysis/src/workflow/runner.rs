use std::sync::Arc;

use parley_backend_sdk::ResearchBackend;
use shared_types::{Questionnaire, SavedSimulation, SimulationResults, SimulationSource};
use tokio::sync::watch;
use tracing::{error, info};

use super::{poll_progress, CancelToken, FlowState, PollConfig, PollOutcome, WorkflowError};
use crate::questionnaire::simulation_request_from_questionnaire;
use crate::store::ResultsStore;

/// Orchestrates one simulation run: submit the questionnaire, start the
/// simulation, poll progress, collect results, persist them.
///
/// State transitions are published on a watch channel so callers can render
/// the flow while `run` is in flight.
pub struct SimulationWorkflow {
    backend: Arc<dyn ResearchBackend>,
    store: Arc<dyn ResultsStore>,
    poll: PollConfig,
    interviews_per_stakeholder: u32,
    state: watch::Sender<FlowState>,
}

impl SimulationWorkflow {
    pub fn new(backend: Arc<dyn ResearchBackend>, store: Arc<dyn ResultsStore>) -> Self {
        let (state, _) = watch::channel(FlowState::Idle);
        Self {
            backend,
            store,
            poll: PollConfig::default(),
            interviews_per_stakeholder: 1,
            state,
        }
    }

    pub fn with_poll_config(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    pub fn with_interviews_per_stakeholder(mut self, count: u32) -> Self {
        self.interviews_per_stakeholder = count;
        self
    }

    pub fn state(&self) -> watch::Receiver<FlowState> {
        self.state.subscribe()
    }

    fn set_state(&self, state: FlowState) {
        // send_replace: the state must advance even while nobody watches
        self.state.send_replace(state);
    }

    fn fail<E: Into<WorkflowError>>(&self, err: E) -> WorkflowError {
        let err = err.into();
        self.set_state(FlowState::Failed {
            message: err.to_string(),
        });
        err
    }

    pub async fn run(
        &self,
        questionnaire: &Questionnaire,
        cancel: &CancelToken,
    ) -> Result<SimulationResults, WorkflowError> {
        let session_id = questionnaire.session_id.clone();

        self.set_state(FlowState::Uploading);
        self.backend
            .submit_questionnaire(&session_id, questionnaire)
            .await
            .map_err(|e| self.fail(e))?;
        self.set_state(FlowState::Uploaded);

        let request =
            simulation_request_from_questionnaire(questionnaire, self.interviews_per_stakeholder);
        let started = self
            .backend
            .start_simulation(&request)
            .await
            .map_err(|e| self.fail(e))?;
        let simulation_id = started.simulation_id;
        info!(%session_id, %simulation_id, "Simulation started");

        self.set_state(FlowState::Simulating { percent: 0.0 });
        let outcome = poll_progress(
            self.backend.as_ref(),
            &simulation_id,
            &self.poll,
            cancel,
            |progress| {
                self.set_state(FlowState::Simulating {
                    percent: progress.percent,
                });
            },
        )
        .await;

        match outcome {
            PollOutcome::Completed | PollOutcome::AlreadyCollected => {}
            PollOutcome::Cancelled => {
                self.set_state(FlowState::Cancelled);
                return Err(WorkflowError::Cancelled);
            }
            PollOutcome::TimedOut => {
                return Err(self.fail(WorkflowError::TimedOut(self.poll.timeout)));
            }
        }

        let results = self.collect_results(&simulation_id).await?;

        self.store
            .append(SavedSimulation::new(
                results.clone(),
                SimulationSource::Simulation,
            ))
            .await
            .map_err(|e| self.fail(e))?;

        self.set_state(FlowState::Completed);
        info!(%simulation_id, interviews = results.interviews.len(), "Simulation results stored");
        Ok(results)
    }

    /// Fetch results by id, falling back to the completed list when the
    /// per-id record has already been garbage-collected.
    async fn collect_results(
        &self,
        simulation_id: &str,
    ) -> Result<SimulationResults, WorkflowError> {
        match self.backend.completed_simulation(simulation_id).await {
            Ok(results) => Ok(results),
            Err(err) if err.is_not_found() => {
                let completed = self
                    .backend
                    .completed_simulations()
                    .await
                    .map_err(|e| self.fail(e))?;
                completed
                    .simulations
                    .into_iter()
                    .find(|s| s.simulation_id == simulation_id)
                    .ok_or_else(|| {
                        error!(simulation_id, "Completed simulation not found in backend list");
                        self.fail(WorkflowError::ResultsMissing(simulation_id.to_string()))
                    })
            }
            Err(err) => Err(self.fail(err)),
        }
    }
}
