//! Answer matching and word blanking for quiz sentences.

use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};

/// Result of comparing a typed answer to the expected word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_correct: bool,
    /// Trimmed typed answer (for display).
    pub typed: String,
    /// The expected word, as stored.
    pub expected: String,
}

/// Compare a typed answer to the expected word, ignoring case and
/// surrounding whitespace.
pub fn compare_answers(typed: &str, expected: &str) -> MatchResult {
    let typed = typed.trim();
    MatchResult {
        is_correct: typed.to_lowercase() == expected.trim().to_lowercase(),
        typed: typed.to_string(),
        expected: expected.to_string(),
    }
}

/// Case-insensitive substring test.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Replace every whole-word, case-insensitive occurrence of `word` in `text`
/// with `blank`. Returns `None` when nothing was replaced.
pub fn blank_out(text: &str, word: &str, blank: &str) -> Option<String> {
    if word.is_empty() {
        return None;
    }
    let pattern = format!(r"(?i)\b{}\b", regex::escape(word));
    let re = match Regex::new(&pattern) {
        Ok(re) => re,
        Err(err) => {
            tracing::warn!(%word, error = %err, "cannot build blanking pattern");
            return None;
        }
    };

    if !re.is_match(text) {
        return None;
    }
    Some(re.replace_all(text, NoExpand(blank)).into_owned())
}
