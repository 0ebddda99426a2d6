//! In-process [`EventRepository`] implementation.
//!
//! ## Summary
//! Events are kept in a map keyed by id with a parent back-reference on each
//! event and a separate ordered child index. Each event's occurrences are
//! kept sorted in default order so reads never need to re-sort, and an
//! occurrence index maps every occurrence id to its owning event.

use std::collections::HashMap;

use chrono::NaiveDateTime;
use eventide_core::types::Status;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::model::{Event, EventFields, EventId, Occurrence, OccurrenceId};
use crate::repository::EventRepository;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Insertion order of events.
    order: Vec<EventId>,
    events: HashMap<EventId, Event>,
    children: HashMap<EventId, Vec<EventId>>,
    occurrences: HashMap<EventId, Vec<Occurrence>>,
    /// Owning event of every stored occurrence.
    occurrence_owners: HashMap<OccurrenceId, EventId>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// ## Summary
    /// Creates an event, optionally under `parent`, and returns its new id.
    ///
    /// ## Errors
    /// Returns [`StoreError::EventNotFound`] if `parent` does not exist.
    pub fn add_event(&mut self, fields: EventFields, parent: Option<EventId>) -> StoreResult<EventId> {
        let id = Uuid::now_v7();
        self.insert_event(id, fields, parent)?;
        Ok(id)
    }

    /// ## Summary
    /// Creates an event with a caller-chosen id.
    ///
    /// ## Errors
    /// Returns [`StoreError::DuplicateId`] if `id` is taken,
    /// [`StoreError::EventNotFound`] if `parent` does not exist and a
    /// validation error for a blank title.
    #[tracing::instrument(skip(self, values), fields(title = %values.title))]
    pub fn insert_event(
        &mut self,
        id: EventId,
        values: EventFields,
        parent: Option<EventId>,
    ) -> StoreResult<()> {
        values.validate()?;
        if self.events.contains_key(&id) {
            return Err(StoreError::DuplicateId(id));
        }
        if let Some(parent_id) = parent {
            if !self.events.contains_key(&parent_id) {
                return Err(StoreError::EventNotFound(parent_id));
            }
            self.children.entry(parent_id).or_default().push(id);
        }

        self.events.insert(id, Event::new(id, parent, values));
        self.order.push(id);
        tracing::debug!("Event created");
        Ok(())
    }

    /// ## Summary
    /// Re-parents `id` (and its subtree) under `new_parent`, or makes it a
    /// root. Field values are left untouched.
    ///
    /// ## Errors
    /// Returns [`StoreError::EventNotFound`] for unknown ids and
    /// [`StoreError::CycleDetected`] if `new_parent` is `id` or one of its
    /// descendants.
    #[tracing::instrument(skip(self))]
    pub fn move_event(&mut self, id: EventId, new_parent: Option<EventId>) -> StoreResult<()> {
        let old_parent = self
            .events
            .get(&id)
            .ok_or(StoreError::EventNotFound(id))?
            .parent_id();

        if let Some(parent_id) = new_parent {
            if !self.events.contains_key(&parent_id) {
                return Err(StoreError::EventNotFound(parent_id));
            }
            if self.descendant_ids(id, true).contains(&parent_id) {
                return Err(StoreError::CycleDetected {
                    event_id: id,
                    parent_id,
                });
            }
        }

        if let Some(old) = old_parent {
            self.detach_child(old, id);
        }
        if let Some(parent_id) = new_parent {
            self.children.entry(parent_id).or_default().push(id);
        }
        if let Some(event) = self.events.get_mut(&id) {
            event.set_parent(new_parent);
        }
        Ok(())
    }

    /// ## Summary
    /// Deletes `id`, its whole subtree and all of their occurrences.
    /// Siblings and ancestors keep their values.
    ///
    /// ## Errors
    /// Returns [`StoreError::EventNotFound`] if `id` does not exist.
    #[tracing::instrument(skip(self))]
    pub fn delete_event(&mut self, id: EventId) -> StoreResult<Vec<EventId>> {
        let parent = self
            .events
            .get(&id)
            .ok_or(StoreError::EventNotFound(id))?
            .parent_id();

        let removed = self.descendant_ids(id, true);
        for removed_id in &removed {
            self.events.remove(removed_id);
            self.children.remove(removed_id);
            for occurrence in self.occurrences.remove(removed_id).unwrap_or_default() {
                self.occurrence_owners.remove(&occurrence.id());
            }
        }
        self.order.retain(|existing| !removed.contains(existing));
        if let Some(parent_id) = parent {
            self.detach_child(parent_id, id);
        }

        tracing::debug!(count = removed.len(), "Events deleted");
        Ok(removed)
    }

    /// ## Summary
    /// Stores an occurrence built by the caller.
    ///
    /// ## Errors
    /// Returns [`StoreError::EventNotFound`] if the owning event does not
    /// exist and [`StoreError::DuplicateId`] if the id is already stored.
    pub fn add_occurrence(&mut self, occurrence: Occurrence) -> StoreResult<OccurrenceId> {
        let event_id = occurrence.event_id();
        if !self.events.contains_key(&event_id) {
            return Err(StoreError::EventNotFound(event_id));
        }
        let id = occurrence.id();
        if self.occurrence_owners.contains_key(&id) {
            return Err(StoreError::DuplicateId(id));
        }
        self.occurrence_owners.insert(id, event_id);

        let occurrences = self.occurrences.entry(event_id).or_default();
        let position = occurrences
            .partition_point(|existing| Occurrence::default_order(existing, &occurrence).is_lt());
        occurrences.insert(position, occurrence);
        Ok(id)
    }

    /// ## Summary
    /// Creates and stores an occurrence of `event_id`.
    ///
    /// ## Errors
    /// Returns an error if `end` precedes `start` or the event is unknown.
    pub fn create_occurrence(
        &mut self,
        event_id: EventId,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> StoreResult<OccurrenceId> {
        self.add_occurrence(Occurrence::new(event_id, start, end)?)
    }

    #[must_use]
    pub fn occurrence(&self, id: OccurrenceId) -> Option<&Occurrence> {
        self.find_occurrence(id)
            .and_then(|(event_id, index)| self.occurrences.get(&event_id)?.get(index))
    }

    /// ## Summary
    /// Moves an occurrence to a new slot and/or status, keeping its identity.
    ///
    /// ## Errors
    /// Returns [`StoreError::OccurrenceNotFound`] for unknown ids and
    /// `InvalidRange` if `end` precedes `start`.
    pub fn update_occurrence(
        &mut self,
        id: OccurrenceId,
        start: NaiveDateTime,
        end: NaiveDateTime,
        status: Status,
    ) -> StoreResult<()> {
        let (event_id, index) = self
            .find_occurrence(id)
            .ok_or(StoreError::OccurrenceNotFound(id))?;
        let occurrences = self
            .occurrences
            .get_mut(&event_id)
            .ok_or(StoreError::OccurrenceNotFound(id))?;

        let occurrence = occurrences
            .get_mut(index)
            .ok_or(StoreError::OccurrenceNotFound(id))?;
        occurrence.reschedule(start, end)?;
        occurrence.set_status(status);
        occurrences.sort_by(Occurrence::default_order);
        Ok(())
    }

    /// ## Errors
    /// Returns [`StoreError::OccurrenceNotFound`] for unknown ids.
    pub fn remove_occurrence(&mut self, id: OccurrenceId) -> StoreResult<Occurrence> {
        let (event_id, index) = self
            .find_occurrence(id)
            .ok_or(StoreError::OccurrenceNotFound(id))?;
        let removed = self
            .occurrences
            .get_mut(&event_id)
            .map(|occurrences| occurrences.remove(index))
            .ok_or(StoreError::OccurrenceNotFound(id))?;
        self.occurrence_owners.remove(&id);
        Ok(removed)
    }

    /// Every stored occurrence in default order.
    #[must_use]
    pub fn all_occurrences(&self) -> Vec<&Occurrence> {
        let mut all: Vec<&Occurrence> = self.occurrences.values().flatten().collect();
        all.sort_by(|a, b| Occurrence::default_order(a, b));
        all
    }

    fn find_occurrence(&self, id: OccurrenceId) -> Option<(EventId, usize)> {
        let event_id = *self.occurrence_owners.get(&id)?;
        self.occurrences
            .get(&event_id)?
            .iter()
            .position(|occurrence| occurrence.id() == id)
            .map(|index| (event_id, index))
    }

    fn detach_child(&mut self, parent: EventId, child: EventId) {
        if let Some(siblings) = self.children.get_mut(&parent) {
            siblings.retain(|sibling| *sibling != child);
        }
    }
}

impl EventRepository for MemoryStore {
    fn event(&self, id: EventId) -> Option<&Event> {
        self.events.get(&id)
    }

    fn events(&self) -> impl Iterator<Item = &Event> {
        self.order.iter().filter_map(|id| self.events.get(id))
    }

    fn child_ids(&self, id: EventId) -> &[EventId] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    fn occurrences_of(&self, id: EventId) -> &[Occurrence] {
        self.occurrences.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    #[tracing::instrument(skip(self, fields))]
    fn persist_fields(&mut self, id: EventId, fields: EventFields) -> StoreResult<()> {
        let event = self
            .events
            .get_mut(&id)
            .ok_or(StoreError::EventNotFound(id))?;
        event.set_fields(fields);
        tracing::trace!("Event fields persisted");
        Ok(())
    }
}
