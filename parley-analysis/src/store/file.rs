use crate::store::{ResultsStore, StoreError, StoreEvent};
use shared_types::SavedSimulation;
use std::path::PathBuf;
use std::sync::Mutex;
use tokio::sync::broadcast;
use tracing::debug;

/// Whole-file JSON store, one array of `SavedSimulation` entries.
///
/// Writes are serialized within the process; a second process writing the
/// same file remains last-write-wins.
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
    events: broadcast::Sender<StoreEvent>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let (events, _) = broadcast::channel(16);
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
            events,
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn read_entries(&self) -> Result<Vec<SavedSimulation>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    fn write_entries(&self, entries: &[SavedSimulation]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ResultsStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<SavedSimulation>, StoreError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| StoreError::OperationFailed("store mutex poisoned".to_string()))?;
        self.read_entries()
    }

    async fn append(&self, entry: SavedSimulation) -> Result<(), StoreError> {
        let simulation_id = entry.simulation_id.clone();
        {
            let _guard = self
                .write_lock
                .lock()
                .map_err(|_| StoreError::OperationFailed("store mutex poisoned".to_string()))?;
            let mut entries = self.read_entries()?;
            entries.push(entry);
            self.write_entries(&entries)?;
            debug!(path = %self.path.display(), count = entries.len(), "Appended simulation results");
        }
        let _ = self.events.send(StoreEvent::Appended { simulation_id });
        Ok(())
    }

    async fn clear(&self) -> Result<(), StoreError> {
        {
            let _guard = self
                .write_lock
                .lock()
                .map_err(|_| StoreError::OperationFailed("store mutex poisoned".to_string()))?;
            self.write_entries(&[])?;
        }
        let _ = self.events.send(StoreEvent::Cleared);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }
}
