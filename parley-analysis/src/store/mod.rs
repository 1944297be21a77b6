use async_trait::async_trait;
use shared_types::SavedSimulation;
use tokio::sync::broadcast;

mod file;
mod memory;

#[cfg(test)]
mod tests;

pub use file::JsonFileStore;
pub use memory::MemoryResultsStore;

/// Change notification emitted after every mutation, the analog of the
/// browser `storage` event the dashboard used for cross-tab refresh.
#[derive(Debug, Clone)]
pub enum StoreEvent {
    Appended { simulation_id: String },
    Cleared,
}

/// Persisted simulation-results store.
///
/// Injected wherever results are read or written so workflows never reach
/// into a global; concurrent writers are last-write-wins, matching the
/// storage this replaces.
#[async_trait]
pub trait ResultsStore: Send + Sync {
    async fn load(&self) -> Result<Vec<SavedSimulation>, StoreError>;
    async fn append(&self, entry: SavedSimulation) -> Result<(), StoreError>;
    async fn clear(&self) -> Result<(), StoreError>;

    /// Subscribe to mutation events. Slow receivers may observe lag; they
    /// should reload on the next event rather than assume a full stream.
    fn subscribe(&self) -> broadcast::Receiver<StoreEvent>;
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store operation failed: {0}")]
    OperationFailed(String),
}
