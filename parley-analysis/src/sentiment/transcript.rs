//! Transcript segmentation: chat-format detection, speaker-label stripping,
//! and conversation-pair extraction.

use regex::Regex;

/// A question/answer association scanned out of the transcript. Standalone
/// statements carry no question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationPair {
    pub question: Option<String>,
    pub answer: String,
}

fn timestamp_pattern() -> Regex {
    Regex::new(r"\[\d{1,2}:\d{2}\s?(AM|PM)\]").unwrap()
}

fn chat_speaker_pattern() -> Regex {
    // "[09:00 AM] Interviewer: said something"
    Regex::new(r"^\[[^\]]*\]\s*([^:]{1,40}):\s*(.*)$").unwrap()
}

fn plain_speaker_pattern() -> Regex {
    // "Interviewer: said something", "Q: ...", "Speaker 2: ..."
    Regex::new(r"^([A-Za-z][A-Za-z0-9 ._'-]{0,30}):\s*(.*)$").unwrap()
}

/// True when any line carries a `[HH:MM AM/PM]` timestamp bracket, the
/// format exported by chat tools like Teams.
pub fn is_chat_format(text: &str) -> bool {
    let pattern = timestamp_pattern();
    text.lines().any(|line| pattern.is_match(line))
}

/// Non-blank, trimmed lines.
pub fn content_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Strip a `[timestamp] Speaker:` or `Speaker:` prefix, keeping the spoken
/// content. Lines without a recognizable prefix pass through unchanged.
pub fn strip_speaker_label(line: &str, chat_format: bool) -> String {
    if chat_format {
        if let Some(caps) = chat_speaker_pattern().captures(line) {
            return caps[2].trim().to_string();
        }
        // Timestamp bracket without a speaker colon
        let stripped = timestamp_pattern().replace(line, "");
        let stripped = stripped.trim();
        if stripped != line {
            return strip_speaker_label(stripped, false);
        }
    }
    if let Some(caps) = plain_speaker_pattern().captures(line) {
        let content = caps[2].trim();
        if !content.is_empty() {
            return content.to_string();
        }
    }
    line.trim().to_string()
}

fn is_question_line(line: &str, previous_mentioned_question: bool) -> bool {
    let trimmed = line.trim_end();
    if trimmed.ends_with('?') {
        return true;
    }
    let lower = trimmed.to_lowercase();
    if trimmed.contains(':') && lower.contains("question") {
        return true;
    }
    previous_mentioned_question
}

/// Scan lines and associate each recognized question with the following
/// non-question line; everything else becomes a standalone statement.
pub fn extract_pairs(text: &str, chat_format: bool) -> Vec<ConversationPair> {
    let mut pairs = Vec::new();
    let mut pending_question: Option<String> = None;
    let mut previous_mentioned_question = false;

    for line in content_lines(text) {
        let question = is_question_line(line, previous_mentioned_question);
        previous_mentioned_question = line.to_lowercase().contains("question");

        let content = strip_speaker_label(line, chat_format);
        if content.is_empty() {
            continue;
        }

        if question {
            pending_question = Some(content);
        } else {
            pairs.push(ConversationPair {
                question: pending_question.take(),
                answer: content,
            });
        }
    }

    pairs
}

/// Naive sentence tokenization on `.`/`!`/`?` boundaries. Returns each
/// sentence together with its terminator so interrogatives can be skipped.
pub fn split_sentences(text: &str) -> Vec<(String, Option<char>)> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for ch in text.chars() {
        if matches!(ch, '.' | '!' | '?') {
            let sentence = current.trim().to_string();
            if !sentence.is_empty() {
                sentences.push((sentence, Some(ch)));
            }
            current.clear();
        } else {
            current.push(ch);
        }
    }

    let tail = current.trim().to_string();
    if !tail.is_empty() {
        sentences.push((tail, None));
    }

    sentences
}
