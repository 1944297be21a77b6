//! Selection between backend-provided sentiment and the local heuristic.

use shared_types::{AnalysisResults, SentimentBuckets};
use tracing::debug;

use super::{classify_statements, ClassifierConfig};

/// Placeholder strings the backend is known to emit when it has no real
/// sentiment evidence for a bucket.
const SENTINEL_VALUES: &[&str] = &[
    "No positive statements found",
    "No neutral statements found",
    "No negative statements found",
    "No data available",
    "Analysis pending",
    "N/A",
];

fn is_sentinel(entry: &str) -> bool {
    let trimmed = entry.trim();
    SENTINEL_VALUES
        .iter()
        .any(|sentinel| trimmed.starts_with(sentinel))
}

/// True when the backend classification carries at least one real statement.
pub fn backend_sentiment_usable(buckets: &SentimentBuckets) -> bool {
    buckets
        .positive
        .iter()
        .chain(buckets.neutral.iter())
        .chain(buckets.negative.iter())
        .any(|entry| !entry.trim().is_empty() && !is_sentinel(entry))
}

/// Sentiment evidence for display: the backend's classification when usable,
/// the local heuristic over the transcript otherwise.
pub fn sentiment_evidence(
    analysis: &AnalysisResults,
    transcript: &str,
    config: &ClassifierConfig,
) -> SentimentBuckets {
    if let Some(buckets) = &analysis.sentiment {
        if backend_sentiment_usable(buckets) {
            return buckets.clone();
        }
        debug!(
            session_id = %analysis.session_id,
            "Backend sentiment contains only sentinels, falling back to heuristic"
        );
    } else {
        debug!(
            session_id = %analysis.session_id,
            "Backend returned no sentiment, falling back to heuristic"
        );
    }

    classify_statements(transcript, config)
}
