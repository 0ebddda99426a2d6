//! Serializable snapshot of a whole event forest.
//!
//! Parents must be listed before their children. Occurrences give either an
//! explicit `end` or a `duration_minutes`; with neither they last no time at
//! all.

use chrono::{NaiveDateTime, TimeDelta};
use eventide_core::error::CoreError;
use eventide_core::types::Status;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::StoreResult;
use crate::memory::MemoryStore;
use crate::model::{EventFields, EventId, Occurrence};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub events: Vec<SnapshotEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotEvent {
    /// Generated when absent; children can then not refer to the event.
    #[serde(default)]
    pub id: Option<EventId>,
    #[serde(default)]
    pub parent: Option<EventId>,
    #[serde(flatten)]
    pub fields: EventFields,
    #[serde(default)]
    pub occurrences: Vec<SnapshotOccurrence>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotOccurrence {
    pub start: NaiveDateTime,
    #[serde(default)]
    pub end: Option<NaiveDateTime>,
    #[serde(default)]
    pub duration_minutes: Option<i64>,
    #[serde(default)]
    pub status: Status,
}

impl SnapshotOccurrence {
    fn into_occurrence(self, event_id: EventId) -> StoreResult<Occurrence> {
        let occurrence = match (self.end, self.duration_minutes) {
            (Some(end), _) => Occurrence::new(event_id, self.start, end)?,
            (None, Some(minutes)) => {
                let duration = TimeDelta::try_minutes(minutes).ok_or_else(|| {
                    CoreError::OutOfRange(format!("{minutes} minute duration"))
                })?;
                Occurrence::with_duration(event_id, self.start, duration)?
            }
            (None, None) => Occurrence::new(event_id, self.start, self.start)?,
        };
        Ok(occurrence.with_status(self.status))
    }
}

impl MemoryStore {
    /// ## Summary
    /// Builds a store from a snapshot.
    ///
    /// ## Errors
    /// Fails on the first event whose parent is not yet known, on duplicate
    /// ids and on occurrences whose end precedes their start.
    #[tracing::instrument(skip(snapshot), fields(events = snapshot.events.len()))]
    pub fn from_snapshot(snapshot: Snapshot) -> StoreResult<Self> {
        let mut store = Self::new();
        for event in snapshot.events {
            let id = event.id.unwrap_or_else(Uuid::now_v7);
            store.insert_event(id, event.fields, event.parent)?;
            for occurrence in event.occurrences {
                store.add_occurrence(occurrence.into_occurrence(id)?)?;
            }
        }
        tracing::debug!(events = store.len(), "Snapshot loaded");
        Ok(store)
    }
}
