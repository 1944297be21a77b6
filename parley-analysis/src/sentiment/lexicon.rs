//! Keyword lists for the heuristic classifier.
//!
//! Matching is case-insensitive substring containment, so stems are
//! preferred over inflected forms ("crash" covers "crashes"/"crashed").

pub const POSITIVE_TERMS: &[&str] = &[
    "love",
    "great",
    "excellent",
    "amazing",
    "awesome",
    "fantastic",
    "wonderful",
    "helpful",
    "useful",
    "easy",
    "intuitive",
    "smooth",
    "fast",
    "quick",
    "convenient",
    "reliable",
    "impress",
    "enjoy",
    "happy",
    "pleased",
    "satisf",
    "delight",
    "perfect",
    "brilliant",
    "seamless",
    "efficient",
    "clear",
    "simple",
    "straightforward",
    "saves time",
    "saves me",
    "well designed",
    "works well",
    "good experience",
    "like it",
    "glad",
];

pub const NEGATIVE_TERMS: &[&str] = &[
    "hate",
    "terrible",
    "awful",
    "horrible",
    "frustrat",
    "annoy",
    "confus",
    "difficult",
    "hard to",
    "slow",
    "laggy",
    "clunky",
    "broken",
    "crash",
    "bug",
    "error",
    "fail",
    "nightmare",
    "painful",
    "disappoint",
    "useless",
    "unreliable",
    "complicated",
    "cumbersome",
    "tedious",
    "waste of time",
    "problem",
    "issue",
    "struggle",
    "stuck",
    "worst",
    "miss",
    "lacks",
    "can't find",
    "doesn't work",
    "unusable",
];

/// Short filler expressions that carry no reliable sentiment on their own.
/// A statement matching one of these is only kept when it is tied to a
/// question or long enough to carry real content.
pub const CONTEXT_DEPENDENT_PHRASES: &[&str] = &[
    "pretty intuitive",
    "pretty good",
    "chuckles",
    "laughs",
    "nods",
    "makes sense",
    "sounds good",
    "fair enough",
    "not bad",
    "i guess",
    "you know",
    "i suppose",
];
