//! Integration tests for loading a snapshot and reporting on it.

use eventide_test::app::report::build_report;
use eventide_test::component::calendar::RelativeRangeCalculator;
use eventide_test::component::error::StoreError;
use eventide_test::component::store::MemoryStore;
use eventide_test::component::store::snapshot::Snapshot;

use super::helpers::day;

const FESTIVAL: &str = r#"{
    "events": [
        {
            "id": "0190d6a0-0000-7000-8000-00000000000a",
            "title": "Festival",
            "description": "A week of music",
            "occurrences": [
                { "start": "2010-01-04T18:00:00", "duration_minutes": 120 }
            ]
        },
        {
            "parent": "0190d6a0-0000-7000-8000-00000000000a",
            "title": "Festival",
            "variation": "late show",
            "occurrences": [
                { "start": "2010-01-08T23:00:00", "end": "2010-01-09T01:00:00" },
                { "start": "2010-01-15T23:00:00", "end": "2010-01-16T01:00:00", "status": "cancelled" }
            ]
        },
        {
            "title": "Reading Group",
            "occurrences": [
                { "start": "2010-01-05T19:30:00", "duration_minutes": 60 },
                { "start": "2010-01-12T19:30:00", "duration_minutes": 60 }
            ]
        }
    ]
}"#;

fn festival_store() -> MemoryStore {
    let snapshot: Snapshot = serde_json::from_str(FESTIVAL).expect("snapshot parses");
    MemoryStore::from_snapshot(snapshot).expect("snapshot loads")
}

#[test_log::test]
fn report_summarizes_each_root() {
    let store = festival_store();
    let report = build_report(&store, &RelativeRangeCalculator::default(), day(6))
        .expect("report builds");

    assert_eq!(report.week_start, day(4));
    assert_eq!(report.events.len(), 2);

    let festival = &report.events[0];
    assert_eq!(festival.display, "Festival");
    assert_eq!(festival.descendants, 1);
    assert_eq!(festival.times.as_deref(), Some("6.00pm"));
    assert_eq!(festival.this_week, 2);
    let closing = festival.closing.as_ref().expect("festival closes");
    assert_eq!(closing.start.date(), day(15));

    let reading = &report.events[1];
    assert_eq!(reading.times.as_deref(), Some("7.30pm"));
    assert_eq!(reading.this_week, 1);
}

#[test]
fn report_serializes_to_json() {
    let store = festival_store();
    let report = build_report(&store, &RelativeRangeCalculator::default(), day(6))
        .expect("report builds");

    let json = serde_json::to_value(&report).expect("report serializes");
    assert_eq!(json["date"], "2010-01-06");
    assert_eq!(json["events"][0]["closing"]["status"], "cancelled");
    assert!(json["events"][1]["opening"]["start"].is_string());
}

#[test]
fn snapshot_with_unknown_parent_fails() {
    let raw = r#"{ "events": [ { "parent": "0190d6a0-0000-7000-8000-0000000000ff", "title": "Lost" } ] }"#;
    let snapshot: Snapshot = serde_json::from_str(raw).expect("snapshot parses");

    assert!(matches!(
        MemoryStore::from_snapshot(snapshot),
        Err(StoreError::EventNotFound(_))
    ));
}
