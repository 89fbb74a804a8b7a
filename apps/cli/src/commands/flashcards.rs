use super::Console;
use chrono::NaiveDate;
use rand::Rng;
use std::io::{BufRead, Write};
use vocab_core::{CardView, Store, Tutor};

const KEYS: &str = "[f]lip [n]ext [p]rev [g]ot it [s]peak [q]uit > ";
const NO_VOCABULARY: &str = "No vocabulary found! Go to `vocab add` to add words.";

fn render<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    card: &CardView,
    flipped: bool,
) -> std::io::Result<()> {
    let icon = card.icon.map(|icon| format!("{icon} ")).unwrap_or_default();
    let mark = if card.reviewed { "  ✓" } else { "" };

    console.say("")?;
    console.say(format!("[{}/{}]{mark}", card.position, card.total))?;
    if flipped {
        console.say(format!("  {}", card.meaning))?;
        if !card.example.is_empty() {
            console.say(format!("  \"{}\"", card.example))?;
        }
    } else {
        console.say(format!("  {icon}{}", card.word))?;
        console.say(format!("  {}", card.ipa))?;
        if !card.word_type.is_empty() {
            console.say(format!("  {}", card.word_type))?;
        }
    }
    Ok(())
}

/// Interactive flashcard review. Shuffles first when `rng` is given.
pub fn run_flashcards<S, R, W, G>(
    tutor: &mut Tutor<S>,
    console: &mut Console<R, W>,
    today: NaiveDate,
    rng: Option<&mut G>,
) -> anyhow::Result<()>
where
    S: Store,
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    let mut card = match rng {
        Some(rng) => tutor.shuffle_flashcards(rng)?,
        None => tutor.start_flashcards()?,
    };
    let mut flipped = false;

    loop {
        let Some(current) = card.as_ref() else {
            console.say(NO_VOCABULARY)?;
            return Ok(());
        };
        render(console, current, flipped)?;

        let Some(key) = console.ask(KEYS)? else {
            return Ok(());
        };
        match key.to_lowercase().as_str() {
            "f" | "" => {
                flipped = !flipped;
            }
            "n" => {
                card = tutor.next_card()?;
                flipped = false;
            }
            "p" => {
                card = tutor.prev_card()?;
                flipped = false;
            }
            "g" => {
                let response = tutor.mark_reviewed(today)?;
                console.apply(response.effects)?;
                card = response.value;
                flipped = false;
            }
            "s" => {
                let response = tutor.speak_current_card()?;
                console.apply(response.effects)?;
            }
            "q" => return Ok(()),
            other => console.say(format!("Unknown key `{other}`."))?,
        }
    }
}
