//! JSON report over the root events of a repository.

use chrono::{NaiveDate, NaiveDateTime};
use eventide_calendar::RelativeRangeCalculator;
use eventide_core::types::Status;
use eventide_store::{Event, EventId, EventRepository, EventTree, Occurrence, OccurrenceId};
use serde::Serialize;

use crate::error::AppResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Reference date the weekly counts are relative to.
    pub date: NaiveDate,
    pub week_start: NaiveDate,
    pub events: Vec<EventSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventSummary {
    pub id: EventId,
    pub display: String,
    pub descendants: usize,
    pub opening: Option<OccurrenceSummary>,
    pub closing: Option<OccurrenceSummary>,
    pub times: Option<String>,
    /// Occurrences of the event and its descendants starting in the week of
    /// the reference date.
    pub this_week: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OccurrenceSummary {
    pub id: OccurrenceId,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub status: Status,
}

impl From<&Occurrence> for OccurrenceSummary {
    fn from(occurrence: &Occurrence) -> Self {
        Self {
            id: occurrence.id(),
            start: occurrence.start(),
            end: occurrence.end(),
            status: occurrence.status(),
        }
    }
}

/// ## Summary
/// Summarizes every root event of `repo` relative to `date`.
///
/// ## Errors
/// Returns an error if the week of `date` cannot be represented.
#[tracing::instrument(skip(repo, calculator))]
pub fn build_report<R: EventRepository>(
    repo: &R,
    calculator: &RelativeRangeCalculator,
    date: NaiveDate,
) -> AppResult<Report> {
    let week = calculator.dates_in_week_of(date)?;

    let events = repo
        .roots()
        .into_iter()
        .map(|root| summarize(repo, root, week))
        .collect();

    Ok(Report {
        date,
        week_start: week.start(),
        events,
    })
}

fn summarize<R: EventRepository>(
    repo: &R,
    root: &Event,
    week: eventide_calendar::DaySpan,
) -> EventSummary {
    let id = root.id();
    EventSummary {
        id,
        display: root.to_string(),
        descendants: repo.descendant_count(id),
        opening: repo.opening_occurrence(id).map(OccurrenceSummary::from),
        closing: repo.closing_occurrence(id).map(OccurrenceSummary::from),
        times: repo.times_description(id),
        this_week: repo.subtree_occurrences(id).starts_in(week).len(),
    }
}
