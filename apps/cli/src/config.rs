//! Runtime configuration from the environment.

use std::path::PathBuf;
use std::time::Duration;

const APP_DIR: &str = "vocab-trainer";
const DB_FILE: &str = "vocab.db";

#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub log_level: String,
    /// Hour (0-23) at which a new study day begins.
    pub day_start_hour: u32,
    /// Pause after each quiz answer before the next question.
    pub quiz_pause: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Self {
        let db_path = var("VOCAB_DB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(default_db_path);

        let log_level = var("RUST_LOG").unwrap_or_else(|| "warn".to_string());

        let day_start_hour = var("VOCAB_DAY_START_HOUR")
            .and_then(|value| value.parse::<u32>().ok())
            .filter(|hour| *hour < 24)
            .unwrap_or(0);

        let quiz_pause = var("VOCAB_QUIZ_PAUSE_MS")
            .and_then(|value| value.parse::<u64>().ok())
            .map(Duration::from_millis)
            .unwrap_or(Duration::from_millis(1000));

        Self {
            db_path,
            log_level,
            day_start_hour,
            quiz_pause,
        }
    }

    pub fn with_db_path(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.db_path = path;
        }
        self
    }
}

fn default_db_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(DB_FILE)
}
