use shared_types::generate_typescript_definitions;
use std::fs;
use std::path::Path;

const EXPORTED_TYPES: &[&str] = &[
    "ErrorResponse",
    "ResearchSession",
    "CreateSessionRequest",
    "UpdateSessionRequest",
    "SessionListResponse",
    "SessionMessage",
    "SessionMessagesResponse",
    "PostMessageRequest",
    "Questionnaire",
    "StakeholderQuestions",
    "PersonaSpec",
    "SimulationRequest",
    "SimulationStartResponse",
    "SimulationProgress",
    "InterviewExchange",
    "SimulatedInterview",
    "SimulationResults",
    "CompletedSimulationsResponse",
    "SimulationSource",
    "SavedSimulation",
    "SentimentBuckets",
    "Theme",
    "Pattern",
    "PersonaProfile",
    "AnalysisResults",
    "HistoryEntry",
    "HistoryResponse",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for the web dashboard
    let output = generate_typescript_definitions(EXPORTED_TYPES)?;

    let output_dir = Path::new("web/api-types");
    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join("types.ts");
    fs::write(&output_path, format!("{}\n", output))?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}
