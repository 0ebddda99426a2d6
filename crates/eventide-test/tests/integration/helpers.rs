#![allow(clippy::expect_used, dead_code)]
//! Fixtures shared by the integration tests.
//!
//! Every fixture builds a fresh [`MemoryStore`], so tests never share state.
//! Dates are fixed in January 2010; 2010-01-01 is a Friday.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use eventide_test::component::store::{EventFields, EventId, MemoryStore, Occurrence, OccurrenceId};
use eventide_test::component::types::Status;

pub use tracing;

pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2010, 1, d).expect("valid January date")
}

pub fn at(d: u32, hour: u32, minute: u32) -> NaiveDateTime {
    day(d)
        .and_hms_opt(hour, minute, 0)
        .expect("valid time of day")
}

/// A talk held twice on the 1st (the afternoon slot cancelled) and once on
/// the 2nd.
pub struct TalkFixture {
    pub store: MemoryStore,
    pub talk: EventId,
    pub morning: OccurrenceId,
    pub afternoon: OccurrenceId,
    pub next_day: OccurrenceId,
}

pub fn talk_fixture() -> TalkFixture {
    let mut store = MemoryStore::new();
    let talk = store
        .add_event(EventFields::new("Talk"), None)
        .expect("create talk");
    let morning = store
        .create_occurrence(talk, at(1, 10, 0), at(1, 11, 0))
        .expect("morning slot");
    let afternoon = store
        .add_occurrence(
            Occurrence::new(talk, at(1, 14, 0), at(1, 15, 0))
                .expect("afternoon slot")
                .with_status(Status::Cancelled),
        )
        .expect("store afternoon slot");
    let next_day = store
        .create_occurrence(talk, at(2, 10, 0), at(2, 11, 0))
        .expect("next day slot");

    tracing::debug!(%talk, "Talk fixture ready");
    TalkFixture {
        store,
        talk,
        morning,
        afternoon,
        next_day,
    }
}

/// A performance with a child event. The 2nd's show runs for two days and
/// ends last, but the show on the 3rd starts last.
pub struct PerformanceFixture {
    pub store: MemoryStore,
    pub performance: EventId,
    pub encore: EventId,
    pub evening: OccurrenceId,
    pub marathon: OccurrenceId,
    pub latest_start: OccurrenceId,
    pub encore_show: OccurrenceId,
}

pub fn performance_fixture() -> PerformanceFixture {
    let mut store = MemoryStore::new();
    let performance = store
        .add_event(EventFields::new("Performance"), None)
        .expect("create performance");
    let encore = store
        .add_event(
            EventFields::new("Performance").with_variation("encore"),
            Some(performance),
        )
        .expect("create encore");

    let evening = store
        .create_occurrence(performance, at(1, 19, 0), at(1, 21, 0))
        .expect("evening show");
    let marathon = store
        .add_occurrence(
            Occurrence::with_duration(performance, at(2, 12, 0), TimeDelta::days(2))
                .expect("marathon show"),
        )
        .expect("store marathon show");
    let latest_start = store
        .create_occurrence(performance, at(3, 19, 0), at(3, 20, 0))
        .expect("last show");
    let encore_show = store
        .create_occurrence(encore, at(2, 22, 0), at(2, 23, 0))
        .expect("encore show");

    tracing::debug!(%performance, %encore, "Performance fixture ready");
    PerformanceFixture {
        store,
        performance,
        encore,
        evening,
        marathon,
        latest_start,
        encore_show,
    }
}

/// `film` with three descendants, all titled "Film Night".
pub struct FilmFixture {
    pub store: MemoryStore,
    pub film: EventId,
    pub with_talk: EventId,
    pub with_talk_and_popcorn: EventId,
    pub with_popcorn: EventId,
}

pub fn film_fixture() -> FilmFixture {
    let mut store = MemoryStore::new();
    let film = store
        .add_event(EventFields::new("Film Night"), None)
        .expect("create film");
    let with_talk = store
        .add_event(
            EventFields::new("Film Night").with_variation("director's talk"),
            Some(film),
        )
        .expect("create talk variation");
    let with_talk_and_popcorn = store
        .add_event(
            EventFields::new("Film Night").with_variation("director's talk and popcorn"),
            Some(with_talk),
        )
        .expect("create talk and popcorn variation");
    let with_popcorn = store
        .add_event(
            EventFields::new("Film Night").with_variation("popcorn"),
            Some(film),
        )
        .expect("create popcorn variation");

    tracing::debug!(%film, descendants = 3, "Film fixture ready");
    FilmFixture {
        store,
        film,
        with_talk,
        with_talk_and_popcorn,
        with_popcorn,
    }
}

/// An event with one occurrence per given start, each lasting an hour.
pub fn event_with_starts(starts: &[NaiveDateTime]) -> (MemoryStore, EventId) {
    let mut store = MemoryStore::new();
    let event = store
        .add_event(EventFields::new("Workshop"), None)
        .expect("create workshop");
    for start in starts {
        store
            .create_occurrence(event, *start, *start + TimeDelta::hours(1))
            .expect("create occurrence");
    }
    tracing::debug!(%event, count = starts.len(), "Workshop fixture ready");
    (store, event)
}
