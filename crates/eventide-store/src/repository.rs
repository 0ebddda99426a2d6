//! The boundary to event persistence.
//!
//! ## Summary
//! Implementors supply lookups, the ordered child index, per-event
//! occurrences and a way to persist field values. Tree traversal is provided
//! on top of those primitives and walks the tree with an explicit stack, so
//! deep trees never grow the call stack.

use crate::error::StoreResult;
use crate::model::{Event, EventFields, EventId, Occurrence};
use crate::query::OccurrenceQuery;

pub trait EventRepository {
    fn event(&self, id: EventId) -> Option<&Event>;

    /// Every stored event, in insertion order.
    fn events(&self) -> impl Iterator<Item = &Event>;

    /// Direct children of `id` in sibling order; empty for unknown ids.
    fn child_ids(&self, id: EventId) -> &[EventId];

    /// The event's own occurrences, sorted by start then end.
    fn occurrences_of(&self, id: EventId) -> &[Occurrence];

    /// ## Summary
    /// Writes new field values for an existing event. Called once per
    /// changed event during a save, never for unchanged descendants.
    ///
    /// ## Errors
    /// Returns `StoreError::EventNotFound` for unknown ids, or whatever the
    /// backing store reports.
    fn persist_fields(&mut self, id: EventId, fields: EventFields) -> StoreResult<()>;

    fn parent(&self, id: EventId) -> Option<&Event> {
        self.event(id)?.parent_id().and_then(|parent| self.event(parent))
    }

    fn children(&self, id: EventId) -> Vec<&Event> {
        self.child_ids(id)
            .iter()
            .filter_map(|child| self.event(*child))
            .collect()
    }

    /// Root events (no parent), in insertion order.
    fn roots(&self) -> Vec<&Event> {
        self.events().filter(|event| event.is_root()).collect()
    }

    /// ## Summary
    /// Ids of the subtree below `id` in depth-first pre-order, optionally
    /// starting with `id` itself.
    fn descendant_ids(&self, id: EventId, include_self: bool) -> Vec<EventId> {
        let mut ids = Vec::new();
        if include_self && self.event(id).is_some() {
            ids.push(id);
        }

        let mut stack: Vec<EventId> = self.child_ids(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            ids.push(next);
            stack.extend(self.child_ids(next).iter().rev().copied());
        }
        ids
    }

    fn descendants(&self, id: EventId, include_self: bool) -> Vec<&Event> {
        self.descendant_ids(id, include_self)
            .into_iter()
            .filter_map(|descendant| self.event(descendant))
            .collect()
    }

    fn descendant_count(&self, id: EventId) -> usize {
        self.descendant_ids(id, false).len()
    }

    /// Ancestors of `id`, root first.
    fn ancestors(&self, id: EventId) -> Vec<&Event> {
        let mut ancestors = Vec::new();
        let mut current = self.parent(id);
        while let Some(event) = current {
            ancestors.push(event);
            current = self.parent(event.id());
        }
        ancestors.reverse();
        ancestors
    }

    /// Query over the event's own occurrences.
    fn occurrences(&self, id: EventId) -> OccurrenceQuery<'_> {
        OccurrenceQuery::new(self.occurrences_of(id))
    }

    /// Query over the occurrences of the event and all of its descendants.
    fn subtree_occurrences(&self, id: EventId) -> OccurrenceQuery<'_> {
        OccurrenceQuery::new(
            self.descendant_ids(id, true)
                .into_iter()
                .flat_map(|member| self.occurrences_of(member)),
        )
    }
}
