use std::path::PathBuf;

use chrono::NaiveDate;

/// Summarize the root events of an eventide snapshot as JSON.
#[derive(Debug, Clone, PartialEq, Eq, clap::Parser)]
#[clap(name = "eventide", version)]
pub struct Cli {
    /// JSON snapshot to load
    pub snapshot: PathBuf,
    /// Reference date (YYYY-MM-DD) for the weekly counts; defaults to today
    pub date: Option<NaiveDate>,
}

impl Cli {
    /// The reference date, or `today` when none was given.
    #[must_use]
    pub fn date_or(&self, today: NaiveDate) -> NaiveDate {
        self.date.unwrap_or(today)
    }
}
