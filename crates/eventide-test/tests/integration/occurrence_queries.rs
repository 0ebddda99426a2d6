//! Integration tests for occurrence queries over a stored event.

use super::helpers::{at, day, talk_fixture};
use eventide_test::component::error::CoreError;
use eventide_test::component::store::EventRepository;
use eventide_test::component::types::Status;

/// Filters keep their meaning when chained on a query from the store.
#[test_log::test]
fn talk_occurrence_counts() {
    let fixture = talk_fixture();
    let query = fixture.store.occurrences(fixture.talk);

    assert_eq!(query.between(day(1), day(2)).expect("valid range").len(), 3);
    assert_eq!(query.on(day(1)).len(), 2);
    assert_eq!(query.filter_status(Status::Cancelled).len(), 1);
    assert_eq!(
        query
            .filter_status(Status::Cancelled)
            .between(day(1), day(2))
            .expect("valid range")
            .len(),
        1
    );
    assert_eq!(
        query
            .between(at(1, 0, 0), at(1, 12, 0))
            .expect("valid range")
            .ids(),
        vec![fixture.morning]
    );
    assert_eq!(query.before(day(2)).len(), 2);
    assert_eq!(query.after(day(1)).ids(), vec![fixture.next_day]);
}

/// Every occurrence is either before, on or after any day that it does not
/// straddle.
#[test_log::test]
fn before_on_after_partition_the_occurrences() {
    let fixture = talk_fixture();
    let query = fixture.store.occurrences(fixture.talk);

    for d in [1, 2, 3, 31] {
        let parts = query.before(day(d)).len() + query.on(day(d)).len() + query.after(day(d)).len();
        assert_eq!(parts, query.len(), "day {d}");
    }
}

#[test]
fn single_day_between_equals_on() {
    let fixture = talk_fixture();
    let query = fixture.store.occurrences(fixture.talk);

    assert_eq!(
        query.between(day(1), day(1)).expect("valid range").ids(),
        query.on(day(1)).ids()
    );
}

#[test]
fn reversed_range_is_an_error() {
    let fixture = talk_fixture();
    let query = fixture.store.occurrences(fixture.talk);

    let result = query.between(day(2), day(1));
    assert!(matches!(result, Err(CoreError::InvalidRange { .. })));
}

#[test]
fn forthcoming_and_recent_split_around_now() {
    let fixture = talk_fixture();
    let query = fixture.store.occurrences(fixture.talk);

    let now = at(1, 12, 0);
    assert_eq!(
        query.forthcoming(now).ids(),
        vec![fixture.afternoon, fixture.next_day]
    );
    assert_eq!(query.recent(now).ids(), vec![fixture.morning]);

    let tester = query.filter_status(Status::Normal).date_tester();
    assert!(tester.contains(day(2)));
    assert!(!tester.contains(day(5)));
}

/// A query can be shared with another thread while the store is borrowed.
#[test]
fn query_evaluates_on_another_thread() {
    let fixture = talk_fixture();
    let query = fixture.store.occurrences(fixture.talk).on(day(1));

    let count = std::thread::scope(|scope| {
        scope
            .spawn(|| query.len())
            .join()
            .expect("query thread")
    });
    assert_eq!(count, 2);
}
