//! Integration tests for opening and closing occurrences.

use super::helpers::performance_fixture;
use eventide_test::component::store::{EventSet, EventTree, Occurrence};

#[test_log::test]
fn opening_is_earliest_start_in_subtree() {
    let fixture = performance_fixture();

    let opening = fixture
        .store
        .opening_occurrence(fixture.performance)
        .map(Occurrence::id);
    assert_eq!(opening, Some(fixture.evening));
}

/// The closing occurrence starts last, even though another one ends later.
#[test_log::test]
fn closing_is_latest_start_not_latest_end() {
    let fixture = performance_fixture();

    let closing = fixture
        .store
        .closing_occurrence(fixture.performance)
        .map(Occurrence::id);
    assert_eq!(closing, Some(fixture.latest_start));
    assert_ne!(closing, Some(fixture.marathon));
}

#[test]
fn child_only_sees_its_own_subtree() {
    let fixture = performance_fixture();

    assert_eq!(
        fixture.store.opening_occurrence(fixture.encore).map(Occurrence::id),
        Some(fixture.encore_show)
    );
    assert_eq!(
        fixture.store.closing_occurrence(fixture.encore).map(Occurrence::id),
        Some(fixture.encore_show)
    );
}

#[test]
fn event_set_counts_each_tree_once() {
    let fixture = performance_fixture();
    let set = EventSet::all(&fixture.store);

    assert_eq!(set.top_level_ids(), vec![fixture.performance]);
    let openings: Vec<_> = set.opening_occurrences().iter().map(|o| o.id()).collect();
    let closings: Vec<_> = set.closing_occurrences().iter().map(|o| o.id()).collect();
    assert_eq!(openings, vec![fixture.evening]);
    assert_eq!(closings, vec![fixture.latest_start]);
}
