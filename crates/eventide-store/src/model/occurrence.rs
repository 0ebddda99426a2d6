//! Occurrence model: one concrete, scheduled instance of an event.

use std::cmp::Ordering;

use chrono::{NaiveDateTime, TimeDelta};
use eventide_core::error::{CoreError, CoreResult};
use eventide_core::types::Status;
use uuid::Uuid;

use super::event::EventId;

pub type OccurrenceId = Uuid;

/// A materialized occurrence. Always satisfies `end >= start`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Occurrence {
    id: OccurrenceId,
    event_id: EventId,
    start: NaiveDateTime,
    end: NaiveDateTime,
    status: Status,
}

impl Occurrence {
    /// ## Summary
    /// Creates an occurrence with an explicit end.
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidRange`] if `end` precedes `start`.
    pub fn new(event_id: EventId, start: NaiveDateTime, end: NaiveDateTime) -> CoreResult<Self> {
        check_bounds(start, end)?;
        Ok(Self {
            id: Uuid::now_v7(),
            event_id,
            start,
            end,
            status: Status::Normal,
        })
    }

    /// ## Summary
    /// Creates an occurrence ending `duration` after `start`.
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidRange`] for a negative duration and
    /// [`CoreError::OutOfRange`] if the end cannot be represented.
    pub fn with_duration(
        event_id: EventId,
        start: NaiveDateTime,
        duration: TimeDelta,
    ) -> CoreResult<Self> {
        let end = start
            .checked_add_signed(duration)
            .ok_or_else(|| CoreError::OutOfRange(format!("{start} + {duration}")))?;
        Self::new(event_id, start, end)
    }

    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub fn with_id(mut self, id: OccurrenceId) -> Self {
        self.id = id;
        self
    }

    #[must_use]
    pub const fn id(&self) -> OccurrenceId {
        self.id
    }

    #[must_use]
    pub const fn event_id(&self) -> EventId {
        self.event_id
    }

    #[must_use]
    pub const fn start(&self) -> NaiveDateTime {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// True if `[start, end]` shares at least one instant with `[lower, upper]`.
    #[must_use]
    pub fn overlaps(&self, lower: NaiveDateTime, upper: NaiveDateTime) -> bool {
        self.start <= upper && self.end >= lower
    }

    /// ## Summary
    /// Moves the occurrence to a new time slot, keeping its identity.
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidRange`] if `end` precedes `start`.
    pub fn reschedule(&mut self, start: NaiveDateTime, end: NaiveDateTime) -> CoreResult<()> {
        check_bounds(start, end)?;
        self.start = start;
        self.end = end;
        Ok(())
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
    }

    /// Default collection order: by start, then end, then id.
    #[must_use]
    pub fn default_order(a: &Self, b: &Self) -> Ordering {
        (a.start, a.end, a.id).cmp(&(b.start, b.end, b.id))
    }
}

fn check_bounds(start: NaiveDateTime, end: NaiveDateTime) -> CoreResult<()> {
    if end < start {
        return Err(CoreError::invalid_range(start, end));
    }
    Ok(())
}
