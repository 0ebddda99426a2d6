//! Event and occurrence storage for eventide.
//!
//! The [`repository::EventRepository`] trait is the boundary to whatever
//! persists events; [`memory::MemoryStore`] is the in-process implementation.
//! Queries, opening/closing derivation and the change cascade are written
//! against the trait only.

pub mod error;
pub mod memory;
pub mod model;
pub mod query;
pub mod repository;
pub mod snapshot;
pub mod tree;

pub use error::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use model::{Event, EventField, EventFields, EventId, Occurrence, OccurrenceId};
pub use query::{DateTester, EventSet, OccurrenceQuery, QueryBound};
pub use repository::EventRepository;
pub use tree::{CascadeReport, EventTree};
