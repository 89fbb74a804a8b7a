//! Speech through whichever system synthesizer is installed.

use std::io;
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use vocab_core::{SpeechError, SpeechRequest, Speaker};

/// Words per minute at rate 1.0.
const BASE_WPM: f32 = 175.0;

/// Engines tried in order. The first one that can be spawned wins.
const ENGINES: &[Engine] = &[Engine::EspeakNg, Engine::Espeak, Engine::Say];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Engine {
    EspeakNg,
    Espeak,
    Say,
}

impl Engine {
    fn program(self) -> &'static str {
        match self {
            Self::EspeakNg => "espeak-ng",
            Self::Espeak => "espeak",
            Self::Say => "say",
        }
    }

    fn args(self, request: &SpeechRequest) -> Vec<String> {
        let wpm = words_per_minute(request.rate).to_string();
        match self {
            Self::EspeakNg | Self::Espeak => vec![
                "-v".to_string(),
                espeak_voice(&request.lang),
                "-s".to_string(),
                wpm,
                "--".to_string(),
                request.word.clone(),
            ],
            Self::Say => vec![
                "-r".to_string(),
                wpm,
                "--".to_string(),
                request.word.clone(),
            ],
        }
    }
}

fn words_per_minute(rate: f32) -> u32 {
    (BASE_WPM * rate.clamp(0.1, 4.0)).round() as u32
}

/// `en-US` -> `en-us`, the voice naming espeak uses.
fn espeak_voice(lang: &str) -> String {
    lang.to_lowercase()
}

/// Wait for a speech process on a background thread so it does not linger
/// as a zombie.
fn reap(mut child: Child) -> JoinHandle<Option<ExitStatus>> {
    thread::spawn(move || match child.wait() {
        Ok(status) => Some(status),
        Err(err) => {
            tracing::debug!(error = %err, "failed to wait for speech process");
            None
        }
    })
}

/// Speaker backed by an external synthesizer process. Does not wait for the
/// process to finish.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSpeaker;

impl Speaker for SystemSpeaker {
    fn speak(&self, request: &SpeechRequest) -> Result<(), SpeechError> {
        for engine in ENGINES {
            let spawned = Command::new(engine.program())
                .args(engine.args(request))
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null())
                .spawn();

            match spawned {
                Ok(child) => {
                    tracing::debug!(engine = engine.program(), word = %request.word, "speaking");
                    reap(child);
                    return Ok(());
                }
                Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
                Err(err) => return Err(SpeechError::Engine(err.to_string())),
            }
        }
        Err(SpeechError::Unsupported)
    }
}
