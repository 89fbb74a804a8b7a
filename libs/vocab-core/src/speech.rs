//! Text-to-speech collaborator.

use crate::error::SpeechError;
use crate::progress::Notice;
use serde::Serialize;

pub const DEFAULT_LANG: &str = "en-US";
pub const DEFAULT_RATE: f32 = 0.9;

/// A word to pronounce, with voice settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeechRequest {
    pub word: String,
    pub lang: String,
    pub rate: f32,
}

impl SpeechRequest {
    pub fn new(word: &str) -> Self {
        Self {
            word: word.to_string(),
            lang: DEFAULT_LANG.to_string(),
            rate: DEFAULT_RATE,
        }
    }
}

/// Fire-and-forget speech output.
pub trait Speaker {
    fn speak(&self, request: &SpeechRequest) -> Result<(), SpeechError>;
}

/// Speaker for environments without any speech engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Speaker for Silent {
    fn speak(&self, _request: &SpeechRequest) -> Result<(), SpeechError> {
        Err(SpeechError::Unsupported)
    }
}

/// Speak, turning a failure into a message for the learner. Session state is
/// never affected.
pub fn speak_or_report<S: Speaker + ?Sized>(speaker: &S, request: &SpeechRequest) -> Option<Notice> {
    match speaker.speak(request) {
        Ok(()) => None,
        Err(err) => {
            tracing::warn!(word = %request.word, error = %err, "speech failed");
            Some(Notice::transient(err.to_string()))
        }
    }
}
