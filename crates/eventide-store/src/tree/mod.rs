//! Tree-wide operations on top of an [`EventRepository`].

mod cascade;


pub use cascade::CascadeReport;

use crate::error::StoreResult;
use crate::model::{EventFields, EventId, Occurrence};
use crate::repository::EventRepository;

/// Opening/closing derivation and cascading saves, available on every
/// repository.
pub trait EventTree: EventRepository {
    /// The earliest-starting occurrence of the event or any descendant.
    fn opening_occurrence(&self, id: EventId) -> Option<&Occurrence> {
        self.subtree_occurrences(id).first()
    }

    /// ## Summary
    /// The latest-*starting* occurrence of the event or any descendant.
    ///
    /// End times are only used to break ties between equal starts; an
    /// occurrence that starts earlier but runs longer is never the closing
    /// one.
    fn closing_occurrence(&self, id: EventId) -> Option<&Occurrence> {
        self.subtree_occurrences(id).last()
    }

    /// Usual start time of the event's own occurrences, see
    /// [`eventide_calendar::times_description`].
    fn times_description(&self, id: EventId) -> Option<String> {
        eventide_calendar::times_description(self.occurrences_of(id).iter().map(Occurrence::start))
    }

    /// ## Summary
    /// Saves new field values for `id` and cascades every changed field to
    /// the descendants that still held the old value.
    ///
    /// ## Errors
    /// Returns `StoreError::EventNotFound` if `id` is unknown, a validation
    /// error for a blank title, or any error raised while persisting.
    fn save_event(&mut self, id: EventId, fields: EventFields) -> StoreResult<CascadeReport>
    where
        Self: Sized,
    {
        cascade::save_with_cascade(self, id, fields)
    }
}

impl<R: EventRepository> EventTree for R {}
