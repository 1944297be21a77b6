use super::*;
use shared_types::{SimulationResults, SimulationSource};

fn sample_results(simulation_id: &str) -> SavedSimulation {
    SavedSimulation::new(
        SimulationResults {
            simulation_id: simulation_id.to_string(),
            session_id: "session-1".to_string(),
            interviews: Vec::new(),
            completed_at: 1700000000,
        },
        SimulationSource::Simulation,
    )
}

#[tokio::test]
async fn test_memory_store_append_and_load() {
    let store = MemoryResultsStore::new();
    store.append(sample_results("sim-1")).await.unwrap();
    store.append(sample_results("sim-2")).await.unwrap();

    let entries = store.load().await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].simulation_id, "sim-1");
    assert_eq!(entries[1].simulation_id, "sim-2");
}

#[tokio::test]
async fn test_memory_store_emits_events() {
    let store = MemoryResultsStore::new();
    let mut events = store.subscribe();

    store.append(sample_results("sim-1")).await.unwrap();
    match events.recv().await.unwrap() {
        StoreEvent::Appended { simulation_id } => assert_eq!(simulation_id, "sim-1"),
        other => panic!("unexpected event {other:?}"),
    }

    store.clear().await.unwrap();
    assert!(matches!(events.recv().await.unwrap(), StoreEvent::Cleared));
    assert!(store.load().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_file_store_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("simulation_results.json");
    let store = JsonFileStore::new(&path);

    assert!(store.load().await.unwrap().is_empty());

    store.append(sample_results("sim-1")).await.unwrap();
    store.append(sample_results("sim-2")).await.unwrap();

    // A fresh handle over the same file sees both entries
    let reopened = JsonFileStore::new(&path);
    let entries = reopened.load().await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[1].simulation_id, "sim-2");
}

#[tokio::test]
async fn test_file_store_clear() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("simulation_results.json");
    let store = JsonFileStore::new(&path);

    store.append(sample_results("sim-1")).await.unwrap();
    store.clear().await.unwrap();

    assert!(store.load().await.unwrap().is_empty());
}
