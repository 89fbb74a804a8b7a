//! Fill-in-the-blank quiz over the words not yet reviewed.

use crate::matching::{blank_out, compare_answers, contains_ignore_case};
use crate::types::{QuizProgress, ReviewedSet, VocabularyEntry};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// Placeholder the learner fills in.
pub const BLANK: &str = "___";

/// Where a quiz stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizStatus {
    /// There is no vocabulary at all.
    NoVocabulary,
    /// Every word has been reviewed; nothing to ask.
    AllReviewed,
    Active,
    Complete,
}

/// A question ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizQuestion {
    /// Sentence containing one or more [`BLANK`] markers.
    pub sentence: String,
    /// 1-based question number.
    pub number: usize,
    pub total: usize,
}

/// Outcome of a submitted answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    Correct,
    Incorrect { expected: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub verdict: Verdict,
    /// Final score when this answer finished the quiz.
    pub finished: Option<QuizProgress>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    pool: Vec<VocabularyEntry>,
    order: Vec<usize>,
    index: usize,
    correct: usize,
    had_vocabulary: bool,
}

impl QuizSession {
    /// Start a quiz over the unreviewed part of `vocabulary`, in random order.
    pub fn start<R: Rng + ?Sized>(
        vocabulary: &[VocabularyEntry],
        reviewed: &ReviewedSet,
        rng: &mut R,
    ) -> Self {
        let pool: Vec<VocabularyEntry> = vocabulary
            .iter()
            .filter(|entry| !reviewed.contains(&entry.word))
            .cloned()
            .collect();
        let mut order: Vec<usize> = (0..pool.len()).collect();
        order.shuffle(rng);

        tracing::debug!(
            vocabulary = vocabulary.len(),
            pool = pool.len(),
            "starting quiz"
        );

        Self {
            pool,
            order,
            index: 0,
            correct: 0,
            had_vocabulary: !vocabulary.is_empty(),
        }
    }

    pub fn status(&self) -> QuizStatus {
        if self.pool.is_empty() {
            if self.had_vocabulary {
                QuizStatus::AllReviewed
            } else {
                QuizStatus::NoVocabulary
            }
        } else if self.index < self.order.len() {
            QuizStatus::Active
        } else {
            QuizStatus::Complete
        }
    }

    /// Entries eligible for this quiz.
    pub fn pool(&self) -> &[VocabularyEntry] {
        &self.pool
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn total(&self) -> usize {
        self.pool.len()
    }

    pub fn answered(&self) -> usize {
        self.index
    }

    pub fn progress(&self) -> QuizProgress {
        QuizProgress {
            correct: self.correct,
            total: self.total(),
        }
    }

    /// Share of questions answered, as a whole percentage.
    pub fn percent_complete(&self) -> u8 {
        if self.total() == 0 {
            return 0;
        }
        (100.0 * self.index as f64 / self.total() as f64).round() as u8
    }

    pub fn current_entry(&self) -> Option<&VocabularyEntry> {
        self.order.get(self.index).map(|&i| &self.pool[i])
    }

    pub fn current_question(&self) -> Option<QuizQuestion> {
        let entry = self.current_entry()?;
        Some(QuizQuestion {
            sentence: question_sentence(entry),
            number: self.index + 1,
            total: self.total(),
        })
    }

    /// Check an answer and advance. Blank input, or input while the quiz is
    /// not active, is ignored.
    pub fn submit_answer(&mut self, input: &str) -> Option<Answer> {
        if input.trim().is_empty() {
            return None;
        }
        let entry = self.current_entry()?;
        let result = compare_answers(input, &entry.word);

        let verdict = if result.is_correct {
            self.correct += 1;
            Verdict::Correct
        } else {
            Verdict::Incorrect {
                expected: result.expected,
            }
        };
        self.index += 1;

        let finished = (self.status() == QuizStatus::Complete).then(|| self.progress());
        Some(Answer { verdict, finished })
    }
}

/// Build the blanked sentence for an entry.
///
/// The example sentence is used when it contains the word as a whole word;
/// otherwise a template keyed on the word type.
pub fn question_sentence(entry: &VocabularyEntry) -> String {
    if !entry.example.is_empty() && contains_ignore_case(&entry.example, &entry.word) {
        if let Some(sentence) = blank_out(&entry.example, &entry.word, BLANK) {
            return sentence;
        }
    }

    let meaning = &entry.meaning;
    match entry.word_type.to_lowercase().as_str() {
        "noun" => format!("A {BLANK} is {meaning}."),
        "verb" => format!("To {BLANK} means to {meaning}."),
        "adjective" => format!("Something that is {BLANK} is {meaning}."),
        _ => format!("{meaning} = {BLANK}"),
    }
}
