//! Lazy, composable occurrence and event-set queries.

mod event_set;
mod occurrence;


pub use event_set::EventSet;
pub use occurrence::{DateTester, OccurrenceQuery, QueryBound};
