//! Integration tests for cascading saves through an event tree.

use super::helpers::film_fixture;
use eventide_test::component::error::StoreError;
use eventide_test::component::store::{EventField, EventFields, EventRepository, EventTree, MemoryStore};

fn title_of(store: &MemoryStore, id: uuid::Uuid) -> String {
    store
        .event(id)
        .map(|event| event.title().to_owned())
        .unwrap_or_default()
}

/// Renaming the root renames every descendant still holding the old title.
#[test_log::test]
fn film_night_rename_reaches_all_descendants() {
    let mut fixture = film_fixture();
    assert_eq!(fixture.store.descendant_count(fixture.film), 3);

    let mut values = fixture
        .store
        .event(fixture.film)
        .expect("film exists")
        .fields()
        .clone();
    values.title = "Irish fillum night".to_owned();
    fixture
        .store
        .save_event(fixture.film, values)
        .expect("save film");

    for id in fixture.store.descendant_ids(fixture.film, true) {
        assert_eq!(title_of(&fixture.store, id), "Irish fillum night");
    }
}

#[test_log::test]
fn diverged_child_is_left_alone() {
    let mut store = MemoryStore::new();
    let parent = store
        .add_event(EventFields::new("A"), None)
        .expect("create parent");
    let unchanged = store
        .add_event(EventFields::new("A"), Some(parent))
        .expect("create unchanged child");
    let diverged = store
        .add_event(EventFields::new("X"), Some(parent))
        .expect("create diverged child");

    let report = store
        .save_event(parent, EventFields::new("B"))
        .expect("save parent");

    assert_eq!(title_of(&store, unchanged), "B");
    assert_eq!(title_of(&store, diverged), "X");
    assert_eq!(report.diverged, vec![(diverged, EventField::Title)]);
}

/// Editing a middle node reaches its subtree but never its ancestors or
/// siblings.
#[test_log::test]
fn middle_node_edit_stays_in_its_subtree() {
    let mut fixture = film_fixture();
    let mut values = fixture
        .store
        .event(fixture.with_talk)
        .expect("talk variation exists")
        .fields()
        .clone();
    values.title = "Film and Talk".to_owned();
    values.description = Some("With the director".to_owned());

    let report = fixture
        .store
        .save_event(fixture.with_talk, values)
        .expect("save talk variation");

    assert_eq!(
        report.changed,
        vec![EventField::Title, EventField::Description]
    );
    assert_eq!(report.updated_events(), vec![fixture.with_talk_and_popcorn]);

    let grandchild = fixture
        .store
        .event(fixture.with_talk_and_popcorn)
        .expect("grandchild exists");
    assert_eq!(grandchild.title(), "Film and Talk");
    assert_eq!(
        grandchild.fields().description.as_deref(),
        Some("With the director")
    );
    assert_eq!(title_of(&fixture.store, fixture.film), "Film Night");
    assert_eq!(title_of(&fixture.store, fixture.with_popcorn), "Film Night");
}

#[test_log::test]
fn saving_unchanged_values_is_a_noop() {
    let mut fixture = film_fixture();
    let before: Vec<_> = fixture.store.events().cloned().collect();
    let values = fixture
        .store
        .event(fixture.film)
        .expect("film exists")
        .fields()
        .clone();

    let report = fixture
        .store
        .save_event(fixture.film, values)
        .expect("save film");

    assert!(report.is_noop());
    let after: Vec<_> = fixture.store.events().cloned().collect();
    assert_eq!(before, after);
}

#[test]
fn saving_unknown_event_fails() {
    let mut store = MemoryStore::new();
    let result = store.save_event(uuid::Uuid::now_v7(), EventFields::new("nobody"));
    assert!(matches!(result, Err(StoreError::EventNotFound(_))));
}
