//! Study-day boundaries for streak tracking.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, Timelike};

/// Calendar day a moment counts towards.
///
/// Before `day_start_hour` the previous day is still running, so late-night
/// study extends yesterday's streak instead of starting a new day.
pub fn study_day(at: NaiveDateTime, day_start_hour: u32) -> NaiveDate {
    if at.hour() < day_start_hour {
        (at - Duration::days(1)).date()
    } else {
        at.date()
    }
}

/// Study day for the current local time.
pub fn today(day_start_hour: u32) -> NaiveDate {
    study_day(Local::now().naive_local(), day_start_hour)
}
