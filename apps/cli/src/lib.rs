//! Terminal front end for the vocabulary trainer.

pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod logging;
pub mod speech;

use clap::Parser;
use std::io;

use crate::cli::Cli;
use crate::commands::Console;
use crate::config::Config;
use crate::db::SqliteStore;
use crate::speech::SystemSpeaker;
use vocab_core::Tutor;

pub fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env().with_db_path(cli.db);
    logging::init_tracing(&config.log_level);

    tracing::debug!(db = %config.db_path.display(), "opening database");
    let store = SqliteStore::open(&config.db_path)?;
    let mut tutor = Tutor::new(store)?;

    let stdin = io::stdin();
    let mut console = Console::new(
        stdin.lock(),
        io::stdout().lock(),
        Box::new(SystemSpeaker),
        config.quiz_pause,
    );

    let today = db::date_utils::today(config.day_start_hour);
    commands::dispatch(cli.command, &mut tutor, &mut console, today, &mut rand::thread_rng())
}
