use super::Console;
use anyhow::Context;
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;
use vocab_core::{pronunciation, serialize, SaveOutcome, Store, Tutor};

const EMPTY_LIST: &str = "No vocabulary found! Add words with `vocab add`.";

/// Replace the word list with the contents of `file`, or of the console
/// input when no file is given.
pub fn add<S: Store, R: BufRead, W: Write>(
    tutor: &mut Tutor<S>,
    console: &mut Console<R, W>,
    file: Option<&Path>,
) -> anyhow::Result<SaveOutcome> {
    let raw = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => console.read_all()?,
    };

    let response = tutor.save_vocabulary(&raw)?;
    console.apply(response.effects)?;
    Ok(response.value)
}

pub fn list<S: Store, R: BufRead, W: Write>(
    tutor: &Tutor<S>,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    let vocabulary = tutor.vocabulary()?;
    if vocabulary.is_empty() {
        console.say(EMPTY_LIST)?;
        return Ok(());
    }

    let reviewed = tutor.reviewed()?;
    for (i, entry) in vocabulary.iter().enumerate() {
        let mark = if reviewed.contains(&entry.word) { "✓" } else { " " };
        let word_type = if entry.word_type.is_empty() {
            String::new()
        } else {
            format!(" ({})", entry.word_type)
        };
        console.say(format!(
            "{mark} {:>3}. {}{word_type} {} - {}",
            i + 1,
            entry.word,
            pronunciation::display(&entry.word),
            entry.meaning
        ))?;
        if !entry.example.is_empty() {
            console.say(format!("        e.g. {}", entry.example))?;
        }
    }
    Ok(())
}

/// Print the word list in the same format `add` reads.
pub fn export<S: Store, R: BufRead, W: Write>(
    tutor: &Tutor<S>,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    let text = serialize(&tutor.vocabulary()?);
    if !text.is_empty() {
        writeln!(console.output(), "{text}")?;
    }
    Ok(())
}
