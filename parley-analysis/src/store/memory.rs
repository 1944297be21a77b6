use crate::store::{ResultsStore, StoreError, StoreEvent};
use shared_types::SavedSimulation;
use std::sync::{Arc, Mutex};
use tokio::sync::broadcast;

#[derive(Clone)]
pub struct MemoryResultsStore {
    entries: Arc<Mutex<Vec<SavedSimulation>>>,
    events: broadcast::Sender<StoreEvent>,
}

impl MemoryResultsStore {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
            events,
        }
    }
}

impl Default for MemoryResultsStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ResultsStore for MemoryResultsStore {
    async fn load(&self) -> Result<Vec<SavedSimulation>, StoreError> {
        Ok(self
            .entries
            .lock()
            .map_err(|_| StoreError::OperationFailed("store mutex poisoned".to_string()))?
            .clone())
    }

    async fn append(&self, entry: SavedSimulation) -> Result<(), StoreError> {
        let simulation_id = entry.simulation_id.clone();
        self.entries
            .lock()
            .map_err(|_| StoreError::OperationFailed("store mutex poisoned".to_string()))?
            .push(entry);
        let _ = self.events.send(StoreEvent::Appended { simulation_id });
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        self.entries
            .lock()
            .map_err(|_| StoreError::OperationFailed("store mutex poisoned".to_string()))?
            .clear();
        let _ = self.events.send(StoreEvent::Cleared);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }
}
