//! Terminal commands. Each one drives a [`Tutor`] through a [`Console`].

mod flashcards;
mod input;
mod progress;
mod quiz;
mod reset;

pub use flashcards::run_flashcards;
pub use input::{add, export, list};
pub use progress::show_progress;
pub use quiz::run_quiz;
pub use reset::{reset_all, reset_progress};

use crate::cli::Command;
use chrono::NaiveDate;
use rand::Rng;
use std::io::{self, BufRead, Read, Write};
use std::thread;
use std::time::Duration;
use vocab_core::{speak_or_report, Effect, Speaker, Store, Tutor};

const CELEBRATION: &str = "🎊 ✨ 🎉 ✨ 🎊";

/// Line-oriented terminal: reads answers, prints output and carries out
/// the effects returned by the tutor.
pub struct Console<R, W> {
    input: R,
    output: W,
    speaker: Box<dyn Speaker>,
    pause: Duration,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, speaker: Box<dyn Speaker>, pause: Duration) -> Self {
        Self {
            input,
            output,
            speaker,
            pause,
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, text: impl AsRef<str>) -> io::Result<()> {
        writeln!(self.output, "{}", text.as_ref())
    }

    /// Print `prompt` and read one trimmed line. `None` at end of input.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    pub fn read_all(&mut self) -> io::Result<String> {
        let mut text = String::new();
        self.input.read_to_string(&mut text)?;
        Ok(text)
    }

    /// Yes only for an explicit `y` or `yes`.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        let answer = self.ask(&format!("{question} [y/N] "))?;
        Ok(matches!(
            answer.map(|a| a.to_lowercase()).as_deref(),
            Some("y" | "yes")
        ))
    }

    pub fn apply(&mut self, effects: Vec<Effect>) -> io::Result<()> {
        for effect in effects {
            match effect {
                Effect::Notify(notice) => self.say(&notice.text)?,
                Effect::Speak(request) => {
                    if let Some(notice) = speak_or_report(self.speaker.as_ref(), &request) {
                        self.say(&notice.text)?;
                    }
                }
                Effect::Celebrate => self.say(CELEBRATION)?,
            }
        }
        Ok(())
    }

    /// Pause between quiz questions.
    pub fn pause(&mut self) -> io::Result<()> {
        self.output.flush()?;
        if !self.pause.is_zero() {
            thread::sleep(self.pause);
        }
        Ok(())
    }
}

/// Run one command to completion.
pub fn dispatch<S, R, W, G>(
    command: Command,
    tutor: &mut Tutor<S>,
    console: &mut Console<R, W>,
    today: NaiveDate,
    rng: &mut G,
) -> anyhow::Result<()>
where
    S: Store,
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    tracing::debug!(?command, "dispatching");
    match command {
        Command::Add { file } => {
            add(tutor, console, file.as_deref())?;
        }
        Command::List => list(tutor, console)?,
        Command::Export => export(tutor, console)?,
        Command::Cards { shuffle } => {
            let rng = if shuffle { Some(&mut *rng) } else { None };
            run_flashcards(tutor, console, today, rng)?
        }
        Command::Quiz => run_quiz(tutor, console, today, rng)?,
        Command::Progress { json } => show_progress(tutor, console, today, json)?,
        Command::ResetProgress => reset_progress(tutor, console)?,
        Command::ResetAll { yes } => reset_all(tutor, console, yes)?,
    }
    Ok(())
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use vocab_core::{Notice, SpeechRequest};

    #[test]
    fn apply_prints_notices_and_celebration() {
        let mut console = console("");
        console
            .apply(vec![
                Effect::Notify(Notice::transient("🎉 Correct!")),
                Effect::Celebrate,
                Effect::Speak(SpeechRequest::new("cat")),
            ])
            .unwrap();
        assert_eq!(output(console), format!("🎉 Correct!\n{CELEBRATION}\n"));
    }

    #[test]
    fn failed_speech_is_reported() {
        let mut console = silent_console("");
        console
            .apply(vec![Effect::Speak(SpeechRequest::new("cat"))])
            .unwrap();
        assert_eq!(output(console), "Speech not supported!\n");
    }

    #[test]
    fn ask_returns_none_at_end_of_input() {
        let mut console = console("  hello \n");
        assert_eq!(console.ask("> ").unwrap().as_deref(), Some("hello"));
        assert_eq!(console.ask("> ").unwrap(), None);
    }

    #[test]
    fn confirm_needs_explicit_yes() {
        assert!(console("yes\n").confirm("Sure?").unwrap());
        assert!(console("Y\n").confirm("Sure?").unwrap());
        assert!(!console("\n").confirm("Sure?").unwrap());
        assert!(!console("").confirm("Sure?").unwrap());
    }

    #[test]
    fn dispatch_runs_list() {
        let mut tutor = tutor();
        let mut console = console("");
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
        dispatch(Command::List, &mut tutor, &mut console, today, &mut rng).unwrap();
        assert!(output(console).contains("cat"));
    }
}
