//! Command handlers invoked by a presentation layer.
//!
//! A [`Tutor`] owns the store and the transient sessions. Each user action is
//! one method; it updates state, persists what changed and hands back the
//! side effects (messages, speech, celebration) for the front end to carry out.

use crate::error::Result;
use crate::flashcard::{CardView, FlashcardSession};
use crate::parser;
use crate::progress::{
    compute_progress_summary, evaluate_quiz_badges, Notice, ProgressSummary, StudyStreak,
};
use crate::quiz::{Answer, QuizQuestion, QuizSession, QuizStatus, Verdict};
use crate::speech::SpeechRequest;
use crate::store::{RecordKey, Store, StoreExt};
use crate::types::{BadgeLedger, QuizProgress, ReviewedSet, VocabularyEntry};
use chrono::NaiveDate;
use rand::Rng;

/// Side effect requested by a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Notify(Notice),
    Speak(SpeechRequest),
    Celebrate,
}

/// A command's result plus the effects it requested.
#[derive(Debug, Clone, PartialEq)]
pub struct Response<T> {
    pub value: T,
    pub effects: Vec<Effect>,
}

impl<T> Response<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            effects: Vec::new(),
        }
    }

    fn notify(mut self, notice: Notice) -> Self {
        self.effects.push(Effect::Notify(notice));
        self
    }

    fn with(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }
}

impl From<Notice> for Effect {
    fn from(notice: Notice) -> Self {
        Effect::Notify(notice)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved(usize),
    NoValidEntries,
}

pub struct Tutor<S: Store> {
    store: S,
    flashcards: FlashcardSession,
    quiz: Option<QuizSession>,
}

impl<S: Store> Tutor<S> {
    /// Open a tutor over `store`, with flashcards in list order.
    pub fn new(store: S) -> Result<Self> {
        let mut tutor = Self {
            store,
            flashcards: FlashcardSession::default(),
            quiz: None,
        };
        tutor.flashcards = FlashcardSession::start(tutor.vocabulary()?.len());
        Ok(tutor)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn vocabulary(&self) -> Result<Vec<VocabularyEntry>> {
        self.store.load_or_default(RecordKey::Vocabulary)
    }

    pub fn reviewed(&self) -> Result<ReviewedSet> {
        self.store.load_or_default(RecordKey::Reviewed)
    }

    pub fn quiz_progress(&self) -> Result<QuizProgress> {
        self.store.load_or_default(RecordKey::QuizProgress)
    }

    pub fn badges(&self) -> Result<BadgeLedger> {
        self.store.load_or_default(RecordKey::Badges)
    }

    pub fn streak(&self) -> Result<StudyStreak> {
        self.store.load_or_default(RecordKey::Streak)
    }

    /// Parse and store a new word list, replacing the old one. Invalid input
    /// leaves the stored list untouched.
    pub fn save_vocabulary(&mut self, raw: &str) -> Result<Response<SaveOutcome>> {
        let entries = parser::parse(raw);
        if entries.is_empty() {
            tracing::info!("no valid vocabulary lines");
            return Ok(Response::new(SaveOutcome::NoValidEntries)
                .notify(Notice::transient("No valid lines found! Please follow the format.")));
        }

        self.store.save(RecordKey::Vocabulary, &entries)?;
        self.flashcards = FlashcardSession::start(entries.len());
        tracing::info!(count = entries.len(), "vocabulary saved");

        Ok(Response::new(SaveOutcome::Saved(entries.len()))
            .notify(Notice::transient(format!("Saved {} words!", entries.len()))))
    }

    // Flashcards

    pub fn flashcards(&self) -> &FlashcardSession {
        &self.flashcards
    }

    pub fn current_card(&self) -> Result<Option<CardView>> {
        Ok(self
            .flashcards
            .current_card(&self.vocabulary()?, &self.reviewed()?))
    }

    pub fn start_flashcards(&mut self) -> Result<Option<CardView>> {
        self.flashcards = FlashcardSession::start(self.vocabulary()?.len());
        self.current_card()
    }

    pub fn shuffle_flashcards<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Option<CardView>> {
        self.flashcards = FlashcardSession::shuffled(self.vocabulary()?.len(), rng);
        self.current_card()
    }

    pub fn next_card(&mut self) -> Result<Option<CardView>> {
        self.flashcards.next();
        self.current_card()
    }

    pub fn prev_card(&mut self) -> Result<Option<CardView>> {
        self.flashcards.prev();
        self.current_card()
    }

    /// Confirm the current card and advance to the next one.
    pub fn mark_reviewed(&mut self, today: NaiveDate) -> Result<Response<Option<CardView>>> {
        let vocabulary = self.vocabulary()?;
        let Some(entry) = self.flashcards.current().and_then(|i| vocabulary.get(i)) else {
            return Ok(Response::new(None));
        };

        let mut reviewed = self.reviewed()?;
        if self.flashcards.mark_reviewed(&entry.word, &mut reviewed) {
            tracing::debug!(word = %entry.word, "word reviewed");
        }
        self.store.save(RecordKey::Reviewed, &reviewed)?;
        self.record_activity(today)?;

        let card = self.flashcards.current_card(&vocabulary, &reviewed);
        Ok(Response::new(card).notify(Notice::transient("⭐ Word reviewed!")))
    }

    pub fn speak_current_card(&self) -> Result<Response<()>> {
        let vocabulary = self.vocabulary()?;
        let response = Response::new(());
        Ok(match self.flashcards.current().and_then(|i| vocabulary.get(i)) {
            Some(entry) => response.with(Effect::Speak(SpeechRequest::new(&entry.word))),
            None => response,
        })
    }

    // Quiz

    /// Start a fresh quiz over the unreviewed words.
    pub fn start_quiz<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<QuizStatus> {
        let quiz = QuizSession::start(&self.vocabulary()?, &self.reviewed()?, rng);
        let status = quiz.status();
        self.quiz = Some(quiz);
        Ok(status)
    }

    pub fn quiz(&self) -> Option<&QuizSession> {
        self.quiz.as_ref()
    }

    /// Drop the running quiz without recording anything.
    pub fn leave_quiz(&mut self) {
        self.quiz = None;
    }

    pub fn current_question(&self) -> Option<QuizQuestion> {
        self.quiz.as_ref()?.current_question()
    }

    pub fn speak_quiz_word(&self) -> Response<()> {
        let response = Response::new(());
        match self.quiz.as_ref().and_then(QuizSession::current_entry) {
            Some(entry) => response.with(Effect::Speak(SpeechRequest::new(&entry.word))),
            None => response,
        }
    }

    /// Check an answer. When it finishes the quiz, the score is stored and
    /// badges are evaluated.
    pub fn submit_answer(&mut self, input: &str, today: NaiveDate) -> Result<Response<Option<Answer>>> {
        let Some(answer) = self.quiz.as_mut().and_then(|quiz| quiz.submit_answer(input)) else {
            return Ok(Response::new(None));
        };

        let mut response = match &answer.verdict {
            Verdict::Correct => Response::new(())
                .notify(Notice::transient("🎉 Correct!"))
                .with(Effect::Celebrate),
            Verdict::Incorrect { .. } => Response::new(()).notify(Notice::transient("👀 Try next!")),
        };

        if let Some(progress) = answer.finished {
            response.effects.extend(self.finish_quiz(progress, today)?);
        }

        Ok(Response {
            value: Some(answer),
            effects: response.effects,
        })
    }

    fn finish_quiz(&mut self, progress: QuizProgress, today: NaiveDate) -> Result<Vec<Effect>> {
        tracing::info!(correct = progress.correct, total = progress.total, "quiz complete");
        self.store.save(RecordKey::QuizProgress, &progress)?;

        let mut ledger = self.badges()?;
        let award = evaluate_quiz_badges(progress.correct, progress.total, &ledger);
        for badge in &award.badges {
            tracing::info!(badge = badge.as_str(), "badge earned");
            ledger.record(*badge);
        }
        self.store.save(RecordKey::Badges, &ledger)?;
        self.record_activity(today)?;

        let mut effects: Vec<Effect> = award.events.into_iter().map(Effect::from).collect();
        effects.push(Effect::Celebrate);
        Ok(effects)
    }

    // Progress

    pub fn progress(&self, today: NaiveDate) -> Result<Response<ProgressSummary>> {
        let reviewed = self.reviewed()?;
        let summary = compute_progress_summary(&self.vocabulary()?, &reviewed, self.quiz_progress()?)
            .with_badges(&self.badges()?)
            .with_streak(&self.streak()?, today);
        let notice = Notice::persistent(format!("🏅 {} reviewed", reviewed.len()));
        Ok(Response::new(summary).notify(notice))
    }

    fn record_activity(&mut self, today: NaiveDate) -> Result<()> {
        let mut streak = self.streak()?;
        if streak.record_activity(today) {
            tracing::debug!(days = streak.current_days, "streak updated");
            self.store.save(RecordKey::Streak, &streak)?;
        }
        Ok(())
    }

    // Resets

    /// Forget which words were reviewed. Everything else is kept.
    pub fn reset_progress(&mut self) -> Result<Response<Option<CardView>>> {
        self.store.remove(RecordKey::Reviewed)?;
        let card = self.start_flashcards()?;
        Ok(Response::new(card).notify(Notice::persistent("🔄 Progress reset!")))
    }

    /// Remove every record and discard both sessions.
    pub fn reset_all(&mut self) -> Result<Response<()>> {
        for key in RecordKey::ALL {
            self.store.remove(key)?;
        }
        self.flashcards = FlashcardSession::start(0);
        self.quiz = None;
        tracing::info!("all data cleared");
        Ok(Response::new(()).notify(Notice::transient("All data cleared!")))
    }
}
