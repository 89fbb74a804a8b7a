use super::Console;
use std::io::{BufRead, Write};
use vocab_core::{Store, Tutor};

pub fn reset_progress<S: Store, R: BufRead, W: Write>(
    tutor: &mut Tutor<S>,
    console: &mut Console<R, W>,
) -> anyhow::Result<()> {
    let response = tutor.reset_progress()?;
    console.apply(response.effects)?;
    Ok(())
}

/// Delete everything, after confirmation unless `yes` is set.
pub fn reset_all<S: Store, R: BufRead, W: Write>(
    tutor: &mut Tutor<S>,
    console: &mut Console<R, W>,
    yes: bool,
) -> anyhow::Result<()> {
    if !yes && !console.confirm("Clear ALL vocabulary and progress?")? {
        console.say("Nothing was deleted.")?;
        return Ok(());
    }
    let response = tutor.reset_all()?;
    console.apply(response.effects)?;
    Ok(())
}
