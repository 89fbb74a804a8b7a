//! Core types for the vocabulary trainer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One word/type/meaning/example record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyEntry {
    pub word: String,
    #[serde(rename = "type", default)]
    pub word_type: String,
    pub meaning: String,
    #[serde(default)]
    pub example: String,
}

impl VocabularyEntry {
    pub fn new(word: &str, word_type: &str, meaning: &str, example: &str) -> Self {
        Self {
            word: word.to_string(),
            word_type: word_type.to_string(),
            meaning: meaning.to_string(),
            example: example.to_string(),
        }
    }
}

/// Case-insensitive word identity.
pub fn same_word(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Words the learner has confirmed on a flashcard.
///
/// Stored as given, compared case-insensitively. Case variants in a stored
/// array collapse to the first one on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct ReviewedSet(Vec<String>);

impl ReviewedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.0.iter().any(|w| same_word(w, word))
    }

    /// Add a word. Returns false if it was already present.
    pub fn insert(&mut self, word: &str) -> bool {
        if self.contains(word) {
            return false;
        }
        self.0.push(word.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for ReviewedSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = Self::new();
        for word in iter {
            set.insert(word.as_ref());
        }
        set
    }
}

impl From<Vec<String>> for ReviewedSet {
    fn from(words: Vec<String>) -> Self {
        words.into_iter().collect()
    }
}

impl From<ReviewedSet> for Vec<String> {
    fn from(set: ReviewedSet) -> Self {
        set.0
    }
}

/// Score of the most recently completed quiz.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizProgress {
    pub correct: usize,
    pub total: usize,
}

/// One-time achievements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Badge {
    Quiz7,
    Perfect,
}

impl Badge {
    /// Ledger category the badge is filed under.
    pub fn category(self) -> &'static str {
        match self {
            Self::Quiz7 | Self::Perfect => "quiz",
        }
    }

    /// Identifier stored in the ledger.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Quiz7 => "Quiz7",
            Self::Perfect => "Perfect",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Quiz7" => Some(Self::Quiz7),
            "Perfect" => Some(Self::Perfect),
            _ => None,
        }
    }

    /// Text shown when the badge is earned.
    pub fn message(self) -> &'static str {
        match self {
            Self::Quiz7 => "🏅 Quiz Star: 7+!",
            Self::Perfect => "🌟 Perfect Score!",
        }
    }
}

/// Earned badges by category. Append-only until a full reset.
///
/// Identifiers are kept as strings so records written by newer versions
/// survive a round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BadgeLedger(BTreeMap<String, Vec<String>>);

impl BadgeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, badge: Badge) -> bool {
        self.0
            .get(badge.category())
            .is_some_and(|ids| ids.iter().any(|id| id == badge.as_str()))
    }

    /// Record a badge. Returns false if it was already earned.
    pub fn record(&mut self, badge: Badge) -> bool {
        if self.has(badge) {
            return false;
        }
        self.0
            .entry(badge.category().to_string())
            .or_default()
            .push(badge.as_str().to_string());
        true
    }

    /// Known badges in earn order, across all categories.
    pub fn badges(&self) -> Vec<Badge> {
        self.0
            .values()
            .flatten()
            .filter_map(|id| Badge::from_str(id))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(Vec::is_empty)
    }
}
