use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

mod poller;
mod runner;


pub use poller::{poll_progress, PollConfig, PollOutcome};
pub use runner::SimulationWorkflow;

use crate::store::StoreError;
use parley_backend_sdk::BackendError;

/// Observable state of one simulation flow. Mirrors the dashboard's
/// upload → uploaded → analyzing → results progression.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowState {
    Idle,
    Uploading,
    Uploaded,
    Simulating { percent: f32 },
    Completed,
    Failed { message: String },
    Cancelled,
}

#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("Backend request failed: {0}")]
    Backend(#[from] BackendError),

    #[error("Simulation timed out after {0:?}")]
    TimedOut(Duration),

    #[error("Simulation cancelled")]
    Cancelled,

    #[error("Results store error: {0}")]
    Store(#[from] StoreError),

    #[error("Simulation {0} finished but no results were found")]
    ResultsMissing(String),
}

/// Cooperative cancellation handle.
///
/// Cancelling stops local polling and the flow; the backend job is not
/// aborted and may still run to completion server-side.
#[derive(Clone)]
pub struct CancelToken {
    tx: Arc<watch::Sender<bool>>,
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    pub fn new() -> Self {
        let (tx, rx) = watch::channel(false);
        Self {
            tx: Arc::new(tx),
            rx,
        }
    }

    pub fn cancel(&self) {
        let _ = self.tx.send(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once `cancel` has been called on any clone.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        loop {
            if *rx.borrow_and_update() {
                return;
            }
            if rx.changed().await.is_err() {
                // Sender gone without a cancel; stay pending forever.
                std::future::pending::<()>().await;
            }
        }
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}
