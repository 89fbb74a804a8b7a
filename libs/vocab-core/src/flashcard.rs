//! Flashcard session: an ordering over the vocabulary and a cursor into it.

use crate::pronunciation;
use crate::types::{ReviewedSet, VocabularyEntry};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlashcardSession {
    order: Vec<usize>,
    index: usize,
}

/// Everything needed to render one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub word: String,
    pub icon: Option<&'static str>,
    pub ipa: String,
    pub word_type: String,
    pub meaning: String,
    pub example: String,
    pub reviewed: bool,
    /// 1-based position in the current order.
    pub position: usize,
    pub total: usize,
}

impl FlashcardSession {
    /// Cards in list order.
    pub fn start(len: usize) -> Self {
        Self {
            order: (0..len).collect(),
            index: 0,
        }
    }

    /// Cards in a uniformly random order.
    pub fn shuffled<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Self {
        let mut session = Self::start(len);
        session.order.shuffle(rng);
        session
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Vocabulary index of the current card.
    pub fn current(&self) -> Option<usize> {
        self.order.get(self.index).copied()
    }

    pub fn next(&mut self) {
        if self.order.is_empty() {
            return;
        }
        self.index = (self.index + 1) % self.order.len();
    }

    pub fn prev(&mut self) {
        if self.order.is_empty() {
            return;
        }
        self.index = (self.index + self.order.len() - 1) % self.order.len();
    }

    /// Confirm a card and move on. Returns true if the word was newly added.
    pub fn mark_reviewed(&mut self, word: &str, reviewed: &mut ReviewedSet) -> bool {
        let added = reviewed.insert(word);
        self.next();
        added
    }

    pub fn current_card(
        &self,
        vocabulary: &[VocabularyEntry],
        reviewed: &ReviewedSet,
    ) -> Option<CardView> {
        let entry = vocabulary.get(self.current()?)?;
        Some(CardView {
            word: entry.word.clone(),
            icon: pronunciation::icon(&entry.word),
            ipa: pronunciation::display(&entry.word),
            word_type: entry.word_type.clone(),
            meaning: entry.meaning.clone(),
            example: entry.example.clone(),
            reviewed: reviewed.contains(&entry.word),
            position: self.index + 1,
            total: self.order.len(),
        })
    }
}
