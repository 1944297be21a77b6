use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Positive/neutral/negative partition of extracted interview statements.
///
/// All three buckets are always present; an empty bucket is filled with a
/// fixed placeholder string before it reaches the frontend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SentimentBuckets {
    pub positive: Vec<String>,
    pub neutral: Vec<String>,
    pub negative: Vec<String>,
}

impl SentimentBuckets {
    pub fn total(&self) -> usize {
        self.positive.len() + self.neutral.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Theme {
    pub name: String,
    pub description: Option<String>,
    pub evidence: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Pattern {
    pub name: String,
    pub description: Option<String>,
    pub frequency: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PersonaProfile {
    pub name: String,
    pub role: String,
    pub goals: Vec<String>,
    pub pain_points: Vec<String>,
}

/// Analysis output for a session as returned by the backend.
///
/// Every field except `session_id` is optional in practice; the backend
/// omits sections it has not computed yet.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnalysisResults {
    pub session_id: String,
    #[serde(default)]
    pub themes: Vec<Theme>,
    #[serde(default)]
    pub patterns: Vec<Pattern>,
    pub sentiment: Option<SentimentBuckets>,
    #[serde(default)]
    pub personas: Vec<PersonaProfile>,
}
