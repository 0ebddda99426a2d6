//! Integration tests for the usual start time of an event.

use super::helpers::{at, event_with_starts};
use eventide_test::component::calendar::TIMES_VARY;
use eventide_test::component::store::EventTree;

#[test_log::test]
fn one_occurrence() {
    let (store, event) = event_with_starts(&[at(4, 9, 0)]);
    assert_eq!(store.times_description(event).as_deref(), Some("9.00am"));
}

#[test_log::test]
fn same_day_different_times() {
    let (store, event) = event_with_starts(&[at(4, 9, 0), at(4, 11, 0)]);
    assert_eq!(store.times_description(event).as_deref(), Some(TIMES_VARY));
}

#[test_log::test]
fn different_days_same_time() {
    let (store, event) = event_with_starts(&[at(4, 9, 0), at(5, 9, 0)]);
    assert_eq!(store.times_description(event).as_deref(), Some("9.00am"));
}

#[test_log::test]
fn different_days_different_times() {
    let (store, event) = event_with_starts(&[at(4, 9, 0), at(5, 11, 0)]);
    assert_eq!(store.times_description(event).as_deref(), Some(TIMES_VARY));
}

#[test]
fn afternoon_with_minutes() {
    let (store, event) = event_with_starts(&[at(4, 19, 30), at(11, 19, 30)]);
    assert_eq!(store.times_description(event).as_deref(), Some("7.30pm"));
}

#[test]
fn no_occurrences() {
    let (store, event) = event_with_starts(&[]);
    assert_eq!(store.times_description(event), None);
}
