use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Interview questions for one stakeholder category (e.g., "Technical User").
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StakeholderQuestions {
    pub stakeholder: String,
    pub role_description: Option<String>,
    pub questions: Vec<String>,
}

/// A questionnaire generated by the backend from a research chat session.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Questionnaire {
    pub session_id: String,
    pub stakeholders: Vec<StakeholderQuestions>,
    pub generated_at: i64,
}

impl Questionnaire {
    pub fn question_count(&self) -> usize {
        self.stakeholders.iter().map(|s| s.questions.len()).sum()
    }
}
