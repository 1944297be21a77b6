//! Heuristic sentiment-statement classifier.
//!
//! Partitions free-form interview transcript text into positive / neutral /
//! negative statement buckets using keyword lists. This is a client-side
//! safety net for sessions where the backend returned no usable sentiment
//! evidence; a backend-side LLM sentiment endpoint is the long-term
//! replacement. Accuracy claims end at "keyword heuristic".

mod evidence;
mod lexicon;
mod transcript;


pub use evidence::{backend_sentiment_usable, sentiment_evidence};
pub use transcript::{
    content_lines, extract_pairs, is_chat_format, split_sentences, strip_speaker_label,
    ConversationPair,
};

use shared_types::SentimentBuckets;
use tracing::debug;

/// Tunable knobs of the classifier. The thresholds were hand-tuned against
/// sample transcripts; callers that need different behavior override fields
/// rather than forking the algorithm.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub positive_terms: Vec<String>,
    pub negative_terms: Vec<String>,
    pub context_dependent: Vec<String>,
    /// Minimum statement length in the conversation-pair pass.
    pub min_pair_len: usize,
    /// Minimum statement length in the sentence-fallback pass.
    pub min_sentence_len: usize,
    /// Unmatched statements longer than this are kept as neutral.
    pub keep_unmatched_over: usize,
    /// Context-dependent phrases are only discarded below this length.
    pub context_max_len: usize,
    /// The sentence fallback engages when the pair pass found fewer than
    /// this many statements in total.
    pub min_statements: usize,
    /// Cap per output bucket.
    pub max_per_bucket: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            positive_terms: lexicon::POSITIVE_TERMS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            negative_terms: lexicon::NEGATIVE_TERMS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            context_dependent: lexicon::CONTEXT_DEPENDENT_PHRASES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            min_pair_len: 10,
            min_sentence_len: 20,
            keep_unmatched_over: 40,
            context_max_len: 60,
            min_statements: 5,
            max_per_bucket: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

#[derive(Default)]
struct Buckets {
    positive: Vec<String>,
    neutral: Vec<String>,
    negative: Vec<String>,
}

impl Buckets {
    fn push(&mut self, sentiment: Sentiment, entry: String) {
        match sentiment {
            Sentiment::Positive => self.positive.push(entry),
            Sentiment::Neutral => self.neutral.push(entry),
            Sentiment::Negative => self.negative.push(entry),
        }
    }

    fn total(&self) -> usize {
        self.positive.len() + self.neutral.len() + self.negative.len()
    }

    fn contains(&self, text: &str) -> bool {
        self.positive
            .iter()
            .chain(self.neutral.iter())
            .chain(self.negative.iter())
            .any(|entry| entry.contains(text))
    }
}

fn placeholder(sentiment: Sentiment) -> String {
    let label = match sentiment {
        Sentiment::Positive => "positive",
        Sentiment::Neutral => "neutral",
        Sentiment::Negative => "negative",
    };
    format!("No {} statements found in this interview.", label)
}

/// Partition transcript text into sentiment statement buckets.
///
/// Never fails: degrades through a conversation-pair pass, a sentence-level
/// fallback, a long-line fallback, and finally fixed placeholder strings.
/// Each bucket is capped and always non-empty in the returned value.
pub fn classify_statements(text: &str, config: &ClassifierConfig) -> SentimentBuckets {
    if text.trim().is_empty() {
        return SentimentBuckets {
            positive: vec![placeholder(Sentiment::Positive)],
            neutral: vec![placeholder(Sentiment::Neutral)],
            negative: vec![placeholder(Sentiment::Negative)],
        };
    }

    let chat_format = is_chat_format(text);
    debug!(chat_format, "Classifying transcript statements");

    let mut buckets = Buckets::default();

    // Pass 1: conversation pairs
    let pairs = extract_pairs(text, chat_format);
    debug!(pair_count = pairs.len(), "Extracted conversation pairs");

    for pair in &pairs {
        let has_question = pair.question.is_some();
        if let Some(sentiment) =
            score_statement(&pair.answer, has_question, config.min_pair_len, config)
        {
            let entry = match &pair.question {
                Some(question) => format!("Q: {}\nA: {}", question, pair.answer),
                None => pair.answer.clone(),
            };
            buckets.push(sentiment, entry);
        }
    }

    // Pass 2: sentence-level fallback when the pair pass came up thin.
    // Tokenizes the whole transcript (so sentences may span lines that lack
    // terminal punctuation) and appends rather than replaces: question
    // sentences and text already bucketed by pass 1 are skipped.
    if buckets.total() < config.min_statements {
        debug!(
            statements = buckets.total(),
            "Pair pass below threshold, running sentence fallback"
        );
        let stripped: Vec<String> = content_lines(text)
            .into_iter()
            .map(|line| strip_speaker_label(line, chat_format))
            .collect();
        for (sentence, terminator) in split_sentences(&stripped.join(" ")) {
            if terminator == Some('?') {
                continue;
            }
            if buckets.contains(&sentence) {
                continue;
            }
            if let Some(sentiment) =
                score_statement(&sentence, false, config.min_sentence_len, config)
            {
                buckets.push(sentiment, sentence);
            }
        }
    }

    // Pass 3: last resort, keep any long line as neutral.
    if buckets.total() == 0 {
        debug!("Sentence fallback found nothing, keeping long lines as neutral");
        for line in content_lines(text) {
            if line.chars().count() > config.keep_unmatched_over {
                buckets
                    .neutral
                    .push(strip_speaker_label(line, chat_format));
            }
        }
    }

    buckets.positive.truncate(config.max_per_bucket);
    buckets.neutral.truncate(config.max_per_bucket);
    buckets.negative.truncate(config.max_per_bucket);

    SentimentBuckets {
        positive: non_empty_or_placeholder(buckets.positive, Sentiment::Positive),
        neutral: non_empty_or_placeholder(buckets.neutral, Sentiment::Neutral),
        negative: non_empty_or_placeholder(buckets.negative, Sentiment::Negative),
    }
}

fn non_empty_or_placeholder(bucket: Vec<String>, sentiment: Sentiment) -> Vec<String> {
    if bucket.is_empty() {
        vec![placeholder(sentiment)]
    } else {
        bucket
    }
}

fn score_statement(
    text: &str,
    has_question: bool,
    min_len: usize,
    config: &ClassifierConfig,
) -> Option<Sentiment> {
    let trimmed = text.trim();
    let length = trimmed.chars().count();
    if length < min_len {
        return None;
    }

    let lower = trimmed.to_lowercase();

    // Short filler without a question is an unreliable standalone signal.
    if !has_question
        && length < config.context_max_len
        && config.context_dependent.iter().any(|p| lower.contains(p))
    {
        return None;
    }

    let positive = config
        .positive_terms
        .iter()
        .filter(|term| lower.contains(term.as_str()))
        .count();
    let negative = config
        .negative_terms
        .iter()
        .filter(|term| lower.contains(term.as_str()))
        .count();

    match (positive, negative) {
        (0, 0) => {
            // Keyword-free statements only survive above the length cutoff
            if length > config.keep_unmatched_over {
                Some(Sentiment::Neutral)
            } else {
                None
            }
        }
        (_, 0) => Some(Sentiment::Positive),
        (0, _) => Some(Sentiment::Negative),
        (p, n) if p > n => Some(Sentiment::Positive),
        (p, n) if n > p => Some(Sentiment::Negative),
        _ => Some(Sentiment::Neutral),
    }
}
