pub mod event;
pub mod occurrence;

pub use event::{Event, EventField, EventFields, EventId};
pub use occurrence::{Occurrence, OccurrenceId};
