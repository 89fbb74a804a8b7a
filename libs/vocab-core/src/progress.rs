//! Progress statistics, badges and the daily study streak.

use crate::types::{Badge, BadgeLedger, QuizProgress, ReviewedSet, VocabularyEntry};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of stars in a full rating.
pub const MAX_STARS: u8 = 5;

/// Correct answers needed for [`Badge::Quiz7`].
const QUIZ_STAR_THRESHOLD: usize = 7;

/// Smallest quiz that can earn [`Badge::Perfect`] is one question larger.
const PERFECT_MIN_EXCLUSIVE: usize = 2;

/// A message for the learner. Persistent notices stay on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub text: String,
    pub persist: bool,
}

impl Notice {
    pub fn transient(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            persist: false,
        }
    }

    pub fn persistent(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            persist: true,
        }
    }
}

/// Badges newly earned by a quiz, with one notice per badge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BadgeAward {
    pub badges: Vec<Badge>,
    pub events: Vec<Notice>,
}

/// Work out which quiz badges a finished quiz earns that the ledger does
/// not already hold.
pub fn evaluate_quiz_badges(correct: usize, total: usize, ledger: &BadgeLedger) -> BadgeAward {
    let mut award = BadgeAward::default();

    let mut unlock = |badge: Badge| {
        if !ledger.has(badge) {
            award.badges.push(badge);
            award.events.push(Notice::transient(badge.message()));
        }
    };

    if correct >= QUIZ_STAR_THRESHOLD {
        unlock(Badge::Quiz7);
    }
    if correct == total && total > PERFECT_MIN_EXCLUSIVE {
        unlock(Badge::Perfect);
    }

    award
}

/// Consecutive days with study activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyStreak {
    pub current_days: u32,
    pub longest_days: u32,
    pub last_active: Option<NaiveDate>,
}

impl StudyStreak {
    /// Register activity on `today`. Returns true if the streak changed.
    pub fn record_activity(&mut self, today: NaiveDate) -> bool {
        let next = match self.last_active {
            Some(last) if last == today => return false,
            Some(last) if last.succ_opt() == Some(today) => self.current_days + 1,
            _ => 1,
        };
        self.current_days = next;
        self.longest_days = self.longest_days.max(next);
        self.last_active = Some(today);
        true
    }

    /// Streak length as seen on `today`: zero once a whole day was missed.
    pub fn days_as_of(&self, today: NaiveDate) -> u32 {
        match self.last_active {
            Some(last) if last == today || last.succ_opt() == Some(today) => self.current_days,
            _ => 0,
        }
    }
}

/// Snapshot for the progress view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressSummary {
    pub reviewed_count: usize,
    pub vocab_count: usize,
    pub quiz_correct: usize,
    pub quiz_total: usize,
    pub star_rating: u8,
    pub badges: Vec<Badge>,
    pub streak_days: u32,
    pub longest_streak_days: u32,
}

/// Star rating for `reviewed` out of `vocab` words, rounding halves up.
pub fn star_rating(reviewed: usize, vocab: usize) -> u8 {
    let ratio = reviewed as f64 / vocab.max(1) as f64;
    (ratio * f64::from(MAX_STARS))
        .round()
        .clamp(0.0, f64::from(MAX_STARS)) as u8
}

pub fn compute_progress_summary(
    vocabulary: &[VocabularyEntry],
    reviewed: &ReviewedSet,
    quiz: QuizProgress,
) -> ProgressSummary {
    ProgressSummary {
        reviewed_count: reviewed.len(),
        vocab_count: vocabulary.len(),
        quiz_correct: quiz.correct,
        quiz_total: quiz.total,
        star_rating: star_rating(reviewed.len(), vocabulary.len()),
        badges: Vec::new(),
        streak_days: 0,
        longest_streak_days: 0,
    }
}

impl ProgressSummary {
    pub fn with_badges(mut self, ledger: &BadgeLedger) -> Self {
        self.badges = ledger.badges();
        self
    }

    pub fn with_streak(mut self, streak: &StudyStreak, today: NaiveDate) -> Self {
        self.streak_days = streak.days_as_of(today);
        self.longest_streak_days = streak.longest_days;
        self
    }

    /// Filled and empty stars, e.g. `⭐⭐⭐☆☆`.
    pub fn stars(&self) -> String {
        (0..MAX_STARS)
            .map(|i| if i < self.star_rating { "⭐" } else { "☆" })
            .collect()
    }
}
