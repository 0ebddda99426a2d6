//! Calendar arithmetic for eventide: inclusive date ranges, half-open day
//! enumeration, week/weekend/month ranges relative to a reference date, and
//! the start-time summary used to describe an event's schedule.

pub mod days;
pub mod range;
pub mod relative;
pub mod times;


pub use days::{DayIter, DaySpan};
pub use range::{DateRange, RangePoint};
pub use relative::RelativeRangeCalculator;
pub use times::{TIMES_VARY, format_time_of_day, times_description};
