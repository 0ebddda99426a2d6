//! Event model: a node in a tree of increasingly specific events.

use std::fmt;

use eventide_core::error::{CoreError, CoreResult};
use eventide_core::types::Status;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type EventId = Uuid;

/// User-editable fields of an event. Every one of them cascades.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventFields {
    pub title: String,
    /// How this event differs from its parent, e.g. "director's talk".
    #[serde(default)]
    pub variation: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Status,
}

/// Names a single field of [`EventFields`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventField {
    Title,
    Variation,
    Description,
    Status,
}

impl EventField {
    pub const ALL: [Self; 4] = [Self::Title, Self::Variation, Self::Description, Self::Status];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Variation => "variation",
            Self::Description => "description",
            Self::Status => "status",
        }
    }
}

impl fmt::Display for EventField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl EventFields {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            variation: None,
            description: None,
            status: Status::Normal,
        }
    }

    #[must_use]
    pub fn with_variation(mut self, variation: impl Into<String>) -> Self {
        self.variation = Some(variation.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    /// ## Errors
    /// Returns [`CoreError::ValidationError`] if the title is blank.
    pub fn validate(&self) -> CoreResult<()> {
        if self.title.trim().is_empty() {
            return Err(CoreError::ValidationError("event title is empty".into()));
        }
        Ok(())
    }

    /// True if `self` and `other` hold the same value for `field`.
    #[must_use]
    pub fn field_eq(&self, other: &Self, field: EventField) -> bool {
        match field {
            EventField::Title => self.title == other.title,
            EventField::Variation => self.variation == other.variation,
            EventField::Description => self.description == other.description,
            EventField::Status => self.status == other.status,
        }
    }

    /// Fields whose value differs between `self` and `other`, in declaration order.
    #[must_use]
    pub fn changed_fields(&self, other: &Self) -> Vec<EventField> {
        EventField::ALL
            .into_iter()
            .filter(|field| !self.field_eq(other, *field))
            .collect()
    }

    /// Overwrites `field` with the value `source` holds for it.
    pub fn copy_field_from(&mut self, source: &Self, field: EventField) {
        match field {
            EventField::Title => self.title.clone_from(&source.title),
            EventField::Variation => self.variation.clone_from(&source.variation),
            EventField::Description => self.description.clone_from(&source.description),
            EventField::Status => self.status = source.status,
        }
    }
}

/// A node in the event forest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    id: EventId,
    parent: Option<EventId>,
    fields: EventFields,
}

impl Event {
    #[must_use]
    pub const fn new(id: EventId, parent: Option<EventId>, fields: EventFields) -> Self {
        Self { id, parent, fields }
    }

    #[must_use]
    pub const fn id(&self) -> EventId {
        self.id
    }

    #[must_use]
    pub const fn parent_id(&self) -> Option<EventId> {
        self.parent
    }

    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    #[must_use]
    pub const fn fields(&self) -> &EventFields {
        &self.fields
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.fields.title
    }

    #[must_use]
    pub const fn status(&self) -> Status {
        self.fields.status
    }

    pub(crate) fn set_fields(&mut self, fields: EventFields) {
        self.fields = fields;
    }

    pub(crate) fn set_parent(&mut self, parent: Option<EventId>) {
        self.parent = parent;
    }
}

/// Roots show their title. Children append their variation, if any.
impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.parent, &self.fields.variation) {
            (Some(_), Some(variation)) => write!(f, "{} ({variation})", self.fields.title),
            _ => f.write_str(&self.fields.title),
        }
    }
}
