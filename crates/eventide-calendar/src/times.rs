//! Summarizing an event's start times.
//!
//! ## Summary
//! An event whose occurrences all begin at the same time of day is described
//! by that time ("9.00am"); otherwise it is described as [`TIMES_VARY`].
//! Dates and seconds are ignored when comparing start times.

use std::collections::BTreeSet;

use chrono::{NaiveDateTime, NaiveTime, Timelike};

pub const TIMES_VARY: &str = "Times vary";

/// Formats a time of day as `h.mm` followed by `am`/`pm`, e.g. `9.00am`,
/// `12.30pm`.
#[must_use]
pub fn format_time_of_day(time: NaiveTime) -> String {
    let (pm, hour) = time.hour12();
    let suffix = if pm { "pm" } else { "am" };
    format!("{hour}.{:02}{suffix}", time.minute())
}

/// ## Summary
/// Infers the usual start time from a set of occurrence starts.
///
/// Returns `None` when there are no starts at all, the shared start time when
/// every start has the same hour and minute, and [`TIMES_VARY`] otherwise.
#[must_use]
pub fn times_description<I>(starts: I) -> Option<String>
where
    I: IntoIterator<Item = NaiveDateTime>,
{
    let mut distinct = BTreeSet::new();
    for start in starts {
        distinct.insert((start.hour(), start.minute()));
        if distinct.len() > 1 {
            tracing::trace!(count = distinct.len(), "Start times vary");
            return Some(TIMES_VARY.to_string());
        }
    }

    let (hour, minute) = distinct.pop_first()?;
    NaiveTime::from_hms_opt(hour, minute, 0).map(format_time_of_day)
}
