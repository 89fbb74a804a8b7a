//! Command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about = "Learn vocabulary with flashcards and quizzes.", long_about = None)]
pub struct Cli {
    /// Database file (overrides VOCAB_DB_PATH).
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace the word list. Lines look like `word:type:meaning[:example]`.
    Add {
        /// File to read; stdin when omitted.
        file: Option<PathBuf>,
    },
    /// Print the stored word list.
    List,
    /// Print the stored word list in the input format.
    Export,
    /// Review flashcards.
    Cards {
        /// Start in random order.
        #[arg(long)]
        shuffle: bool,
    },
    /// Fill-in-the-blank quiz over words not yet reviewed.
    Quiz,
    /// Show progress, badges and streak.
    Progress {
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Forget which words were reviewed.
    ResetProgress,
    /// Delete the word list and all progress.
    ResetAll {
        /// Do not ask for confirmation.
        #[arg(long)]
        yes: bool,
    },
}
