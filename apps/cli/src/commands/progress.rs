use super::Console;
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use vocab_core::{ProgressSummary, Store, Tutor};

fn days(n: u32) -> String {
    if n == 1 {
        "1 day".to_string()
    } else {
        format!("{n} days")
    }
}

fn render<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    summary: &ProgressSummary,
) -> std::io::Result<()> {
    console.say(format!(
        "Words reviewed: {} / {}",
        summary.reviewed_count, summary.vocab_count
    ))?;
    console.say(format!(
        "Latest quiz: {} / {}",
        summary.quiz_correct, summary.quiz_total
    ))?;
    console.say(summary.stars())?;

    if summary.badges.is_empty() {
        console.say("Badges: none yet")?;
    } else {
        let badges: Vec<&str> = summary.badges.iter().map(|badge| badge.message()).collect();
        console.say(format!("Badges: {}", badges.join("  ")))?;
    }

    console.say(format!(
        "Streak: {} (longest {})",
        days(summary.streak_days),
        days(summary.longest_streak_days)
    ))
}

pub fn show_progress<S: Store, R: BufRead, W: Write>(
    tutor: &Tutor<S>,
    console: &mut Console<R, W>,
    today: NaiveDate,
    json: bool,
) -> anyhow::Result<()> {
    let response = tutor.progress(today)?;
    if json {
        console.say(serde_json::to_string_pretty(&response.value)?)?;
        return Ok(());
    }
    render(console, &response.value)?;
    console.apply(response.effects)?;
    Ok(())
}
