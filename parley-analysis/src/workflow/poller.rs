use std::time::Duration;

use parley_backend_sdk::ResearchBackend;
use shared_types::SimulationProgress;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

use super::CancelToken;

/// Polling cadence and cap for the simulation progress endpoint.
#[derive(Debug, Clone)]
pub struct PollConfig {
    pub interval: Duration,
    pub timeout: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(2),
            timeout: Duration::from_secs(600),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum PollOutcome {
    /// Progress reached 100%.
    Completed,
    /// The progress record 404ed: the run finished and was already
    /// garbage-collected server-side.
    AlreadyCollected,
    Cancelled,
    TimedOut,
}

/// Poll the backend until the simulation completes, the deadline passes, or
/// the token is cancelled. Network errors on a tick are transient: they are
/// logged and the next tick proceeds. Ticks never overlap.
pub async fn poll_progress(
    backend: &dyn ResearchBackend,
    simulation_id: &str,
    config: &PollConfig,
    cancel: &CancelToken,
    mut on_progress: impl FnMut(&SimulationProgress),
) -> PollOutcome {
    let deadline = tokio::time::Instant::now() + config.timeout;
    let mut ticker = tokio::time::interval(config.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                info!(simulation_id, "Progress polling cancelled");
                return PollOutcome::Cancelled;
            }
            _ = tokio::time::sleep_until(deadline) => {
                warn!(simulation_id, timeout = ?config.timeout, "Progress polling timed out");
                return PollOutcome::TimedOut;
            }
            _ = ticker.tick() => {
                match backend.simulation_progress(simulation_id).await {
                    Ok(progress) => {
                        debug!(simulation_id, percent = progress.percent, "Simulation progress");
                        on_progress(&progress);
                        if progress.is_complete() {
                            return PollOutcome::Completed;
                        }
                    }
                    Err(err) if err.is_not_found() => {
                        info!(simulation_id, "Progress record gone, treating simulation as completed");
                        return PollOutcome::AlreadyCollected;
                    }
                    Err(err) => {
                        warn!(simulation_id, error = %err, "Progress poll failed, will retry");
                    }
                }
            }
        }
    }
}
