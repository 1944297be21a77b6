/// Render the TypeScript declarations for the named shared types, in order.
pub fn generate_typescript_definitions(
    type_names: &[&str],
) -> Result<String, Box<dyn std::error::Error>> {
    if type_names.is_empty() {
        return Err("No type names provided".into());
    }

    let definitions = type_names
        .iter()
        .map(|name| export_type(name).map(clean_type))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(definitions
        .into_iter()
        .filter(|definition| !definition.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n"))
}

fn export_type(name: &str) -> Result<String, Box<dyn std::error::Error>> {
    use crate::*;
    use ts_rs::TS;

    let result = match name {
        "ErrorResponse" => ErrorResponse::export_to_string()?,

        "ResearchSession" => ResearchSession::export_to_string()?,
        "CreateSessionRequest" => CreateSessionRequest::export_to_string()?,
        "UpdateSessionRequest" => UpdateSessionRequest::export_to_string()?,
        "SessionListResponse" => SessionListResponse::export_to_string()?,
        "SessionMessage" => SessionMessage::export_to_string()?,
        "SessionMessagesResponse" => SessionMessagesResponse::export_to_string()?,
        "PostMessageRequest" => PostMessageRequest::export_to_string()?,

        "Questionnaire" => Questionnaire::export_to_string()?,
        "StakeholderQuestions" => StakeholderQuestions::export_to_string()?,

        "PersonaSpec" => PersonaSpec::export_to_string()?,
        "SimulationRequest" => SimulationRequest::export_to_string()?,
        "SimulationStartResponse" => SimulationStartResponse::export_to_string()?,
        "SimulationProgress" => SimulationProgress::export_to_string()?,
        "InterviewExchange" => InterviewExchange::export_to_string()?,
        "SimulatedInterview" => SimulatedInterview::export_to_string()?,
        "SimulationResults" => SimulationResults::export_to_string()?,
        "CompletedSimulationsResponse" => CompletedSimulationsResponse::export_to_string()?,
        "SimulationSource" => SimulationSource::export_to_string()?,
        "SavedSimulation" => SavedSimulation::export_to_string()?,

        "SentimentBuckets" => SentimentBuckets::export_to_string()?,
        "Theme" => Theme::export_to_string()?,
        "Pattern" => Pattern::export_to_string()?,
        "PersonaProfile" => PersonaProfile::export_to_string()?,
        "AnalysisResults" => AnalysisResults::export_to_string()?,

        "HistoryEntry" => HistoryEntry::export_to_string()?,
        "HistoryResponse" => HistoryResponse::export_to_string()?,

        _ => {
            return Err(format!(
                "Unknown type: '{}'. Available types can be found in shared-types/src/",
                name
            )
            .into());
        }
    };

    Ok(result)
}

/// Drop the per-file preamble ts-rs emits (generation banner, type imports)
/// so the declarations concatenate into a single module.
fn clean_type(type_def: String) -> String {
    type_def
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
        })
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}
