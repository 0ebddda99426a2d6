//! Inclusive date ranges with optional open ends.
//!
//! ## Summary
//! A [`DateRange`] is a value type: shifting it with [`DateRange::later`] or
//! [`DateRange::earlier`] always yields a new range of the same length that
//! sits directly next to the original without overlapping it.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use eventide_core::error::{CoreError, CoreResult};

/// A point on the time line a [`DateRange`] can be built from.
pub trait RangePoint: Copy + Ord + fmt::Debug {
    /// Gap between the end of one range and the start of its successor.
    fn unit() -> TimeDelta;

    /// Moves the point by `delta`, or `None` past the calendar limits.
    fn shift(self, delta: TimeDelta) -> Option<Self>;

    /// Signed distance from `earlier` to `self`.
    fn delta_since(self, earlier: Self) -> TimeDelta;

    fn format_point(self) -> String;
}

impl RangePoint for NaiveDate {
    fn unit() -> TimeDelta {
        TimeDelta::days(1)
    }

    fn shift(self, delta: TimeDelta) -> Option<Self> {
        self.checked_add_signed(delta)
    }

    fn delta_since(self, earlier: Self) -> TimeDelta {
        self.signed_duration_since(earlier)
    }

    fn format_point(self) -> String {
        self.format("%d %b %Y").to_string()
    }
}

/// Date-time ranges step by whole days too, keeping their time of day.
impl RangePoint for NaiveDateTime {
    fn unit() -> TimeDelta {
        TimeDelta::days(1)
    }

    fn shift(self, delta: TimeDelta) -> Option<Self> {
        self.checked_add_signed(delta)
    }

    fn delta_since(self, earlier: Self) -> TimeDelta {
        self.signed_duration_since(earlier)
    }

    fn format_point(self) -> String {
        self.format("%d %b %Y").to_string()
    }
}

/// Inclusive interval `[start, end]`; `None` on either side means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange<T> {
    start: Option<T>,
    end: Option<T>,
}

impl<T: RangePoint> DateRange<T> {
    /// ## Summary
    /// Creates a range from two optional bounds.
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidRange`] if both bounds are present and
    /// `end` precedes `start`.
    pub fn new(start: Option<T>, end: Option<T>) -> CoreResult<Self> {
        if let (Some(s), Some(e)) = (start, end)
            && e < s
        {
            return Err(CoreError::invalid_range(s.format_point(), e.format_point()));
        }
        Ok(Self { start, end })
    }

    /// ## Summary
    /// Creates a closed range `[start, end]`.
    ///
    /// ## Errors
    /// Returns [`CoreError::InvalidRange`] if `end` precedes `start`.
    pub fn bounded(start: T, end: T) -> CoreResult<Self> {
        Self::new(Some(start), Some(end))
    }

    /// A range covering exactly one point.
    #[must_use]
    pub const fn single(point: T) -> Self {
        Self {
            start: Some(point),
            end: Some(point),
        }
    }

    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            start: None,
            end: None,
        }
    }

    #[must_use]
    pub const fn start(&self) -> Option<T> {
        self.start
    }

    #[must_use]
    pub const fn end(&self) -> Option<T> {
        self.end
    }

    /// `end - start`, defined only when both ends are bounded.
    #[must_use]
    pub fn delta(&self) -> Option<TimeDelta> {
        Some(self.end?.delta_since(self.start?))
    }

    /// Inclusive at both ends; an open end accepts everything on its side.
    #[must_use]
    pub fn contains(&self, point: T) -> bool {
        let after_start = self.start.is_none_or(|s| point >= s);
        let before_end = self.end.is_none_or(|e| point <= e);
        after_start && before_end
    }

    /// ## Summary
    /// Returns the range of the same length starting one unit after `end`.
    ///
    /// `None` if either end is open or the shift leaves the calendar.
    #[must_use]
    pub fn later(&self) -> Option<Self> {
        let delta = self.delta()?;
        let start = self.end?.shift(T::unit())?;
        let end = start.shift(delta)?;
        Some(Self {
            start: Some(start),
            end: Some(end),
        })
    }

    /// ## Summary
    /// Returns the range of the same length ending one unit before `start`.
    ///
    /// `None` if either end is open or the shift leaves the calendar.
    #[must_use]
    pub fn earlier(&self) -> Option<Self> {
        let delta = self.delta()?;
        let end = self.start?.shift(-T::unit())?;
        let start = end.shift(-delta)?;
        Some(Self {
            start: Some(start),
            end: Some(end),
        })
    }
}

impl<T: RangePoint> fmt::Display for DateRange<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start == end => f.write_str(&start.format_point()),
            (Some(start), Some(end)) => {
                write!(f, "{} - {}", start.format_point(), end.format_point())
            }
            (Some(start), None) => write!(f, "from {}", start.format_point()),
            (None, Some(end)) => write!(f, "until {}", end.format_point()),
            (None, None) => f.write_str("any time"),
        }
    }
}
