use thiserror::Error;
use uuid::Uuid;

/// Storage layer errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Event not found: {0}")]
    EventNotFound(Uuid),

    #[error("Occurrence not found: {0}")]
    OccurrenceNotFound(Uuid),

    #[error("Duplicate id: {0}")]
    DuplicateId(Uuid),

    #[error("Moving event {event_id} under {parent_id} would create a cycle")]
    CycleDetected { event_id: Uuid, parent_id: Uuid },

    #[error(transparent)]
    CoreError(#[from] eventide_core::error::CoreError),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
