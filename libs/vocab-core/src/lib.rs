//! Core library for the vocabulary trainer.
//!
//! Provides:
//! - Plain-text vocabulary parser
//! - Approximate IPA lookup
//! - Flashcard and quiz sessions
//! - Progress, badge and streak bookkeeping
//! - A typed key-value store abstraction
//! - Command handlers ([`Tutor`]) for a presentation layer

pub mod error;
pub mod flashcard;
pub mod matching;
pub mod parser;
pub mod progress;
pub mod pronunciation;
pub mod quiz;
pub mod speech;
pub mod store;
pub mod tutor;
pub mod types;

pub use error::{Result, SpeechError, StoreError};
pub use flashcard::{CardView, FlashcardSession};
pub use matching::{compare_answers, MatchResult};
pub use parser::{parse, serialize};
pub use progress::{
    compute_progress_summary, evaluate_quiz_badges, star_rating, BadgeAward, Notice,
    ProgressSummary, StudyStreak,
};
pub use pronunciation::transcribe;
pub use quiz::{question_sentence, Answer, QuizQuestion, QuizSession, QuizStatus, Verdict, BLANK};
pub use speech::{speak_or_report, Speaker, SpeechRequest};
pub use store::{MemoryStore, RecordKey, Store, StoreExt};
pub use tutor::{Effect, Response, SaveOutcome, Tutor};
pub use types::{Badge, BadgeLedger, QuizProgress, ReviewedSet, VocabularyEntry};
